//! LLM provider access for the note processor.
//!
//! This module provides:
//! * [`Dispatcher`]: sends a [`ProcessingRequest`] to one provider and
//!   returns plain text or a [`DispatchError`].
//! * [`ProviderId`] / [`ProviderProfile`]: the static provider registry.
//! * [`HttpTransport`]: async trait for the outbound POST;
//!   [`ReqwestTransport`] is the production implementation.
//! * [`prompt`]: model-facing text assembly.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use note_processor::config::AppConfig;
//! use note_processor::llm::{Dispatcher, ProcessingRequest, ProviderId};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = AppConfig::load().unwrap();
//!     let dispatcher = Dispatcher::from_config(&config);
//!
//!     let request = ProcessingRequest::new("# Notes\n...", "Summarise:", ProviderId::Claude);
//!     match dispatcher.dispatch(&request).await {
//!         Ok(text) => println!("{text}"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```

pub mod dispatcher;
pub mod prompt;
pub mod provider;
pub mod transport;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use dispatcher::{DispatchError, Dispatcher, FailureKind, ProcessingRequest, ProviderResult};
pub use provider::{AuthPlacement, ProviderId, ProviderProfile, UnknownProvider};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
