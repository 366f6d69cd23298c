//! Batch processing of note files through an LLM provider.
//!
//! [`BatchRunner`] walks a file list strictly in order; each file is read,
//! sent through the [`Dispatcher`](crate::llm::Dispatcher) and its result
//! written before the next file starts.  What is sent and where the answer
//! lands depends on the [`BatchMode`].
//!
//! # Quick start
//!
//! ```rust,no_run
//! use note_processor::batch::{BatchJob, BatchMode, BatchRunner};
//! use note_processor::config::AppConfig;
//! use note_processor::llm::Dispatcher;
//! use note_processor::vault;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = AppConfig::load().unwrap();
//!     let runner = BatchRunner::new(Dispatcher::from_config(&config));
//!
//!     let files = vault::list_files("notes".as_ref(), Some("md")).unwrap();
//!     let job = BatchJob {
//!         mode: BatchMode::ConvertMarkdown,
//!         provider: config.default_provider,
//!         prompt: config.default_prompt.clone(),
//!     };
//!     let summary = runner.run(&files, &job).await.unwrap();
//!     println!("processed {} files", summary.processed);
//! }
//! ```

pub mod mode;
pub mod runner;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use mode::{BatchMode, UnknownMode};
pub use runner::{BatchError, BatchJob, BatchRunner, BatchSummary, FileError};
