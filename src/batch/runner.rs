//! Sequential batch runner: drives files through the dispatcher one by one.
//!
//! # Flow
//!
//! ```text
//! for each file, in order:
//!   read content ─▶ Dispatcher::dispatch (one call) ─▶ write result
//!                                      │
//!                                      └─ Err ─▶ stop, report BatchError::File
//! ```
//!
//! Files finish completely before the next one starts.  Results already
//! written when a later file fails stay on disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::llm::{DispatchError, Dispatcher, ProcessingRequest, ProviderId};
use crate::vault;

use super::mode::BatchMode;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a single file could not be processed.
#[derive(Debug, Error)]
pub enum FileError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors that stop a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no files selected")]
    NoFiles,

    #[error("prompt is empty")]
    EmptyPrompt,

    /// `processed` files had already been completed when `path` failed.
    #[error("{}: {error}", .path.display())]
    File {
        path: PathBuf,
        processed: usize,
        error: FileError,
    },
}

// ---------------------------------------------------------------------------
// BatchJob / BatchSummary
// ---------------------------------------------------------------------------

/// Everything a batch needs besides the file list.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub mode: BatchMode,
    pub provider: ProviderId,
    pub prompt: String,
}

/// Outcome of a completed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    /// File written for each input, in input order.
    pub outputs: Vec<PathBuf>,
}

// ---------------------------------------------------------------------------
// BatchRunner
// ---------------------------------------------------------------------------

pub struct BatchRunner {
    dispatcher: Dispatcher,
}

impl BatchRunner {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Process `files` in order according to `job`.
    pub async fn run(&self, files: &[PathBuf], job: &BatchJob) -> Result<BatchSummary, BatchError> {
        if files.is_empty() {
            return Err(BatchError::NoFiles);
        }
        if job.prompt.trim().is_empty() {
            return Err(BatchError::EmptyPrompt);
        }

        log::info!(
            "Processing {} file(s) with {} ({})",
            files.len(),
            job.provider,
            job.mode
        );

        let mut summary = BatchSummary::default();
        for path in files {
            let output = self
                .process_file(path, job)
                .await
                .map_err(|error| BatchError::File {
                    path: path.clone(),
                    processed: summary.processed,
                    error,
                })?;

            summary.processed += 1;
            summary.outputs.push(output);
            log::info!("Processed {}/{} files", summary.processed, files.len());
        }

        Ok(summary)
    }

    async fn process_file(&self, path: &Path, job: &BatchJob) -> Result<PathBuf, FileError> {
        match job.mode {
            BatchMode::Filename => {
                let request =
                    ProcessingRequest::for_filename(&vault::basename(path), &job.prompt, job.provider);
                let text = self.dispatcher.dispatch(&request).await?;
                std::fs::write(path, text)?;
                Ok(path.to_path_buf())
            }
            BatchMode::Append => {
                let content = std::fs::read_to_string(path)?;
                let request = ProcessingRequest::new(content.as_str(), &job.prompt, job.provider);
                let text = self.dispatcher.dispatch(&request).await?;
                std::fs::write(path, format!("{content}\n\n{text}"))?;
                Ok(path.to_path_buf())
            }
            BatchMode::ConvertMarkdown | BatchMode::ConvertText => {
                let content = std::fs::read_to_string(path)?;
                let request = ProcessingRequest::new(content, &job.prompt, job.provider);
                let text = self.dispatcher.dispatch(&request).await?;
                let output = vault::processed_path(path);
                vault::create_new(&output, &text)?;
                Ok(output)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
