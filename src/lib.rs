//! Batch note processing through LLM providers, plus deterministic note
//! utilities.
//!
//! * [`llm`]: provider registry and dispatcher.
//! * [`batch`]: sequential per-file processing modes.
//! * [`vocab`]: vocabulary entry parser and markdown table renderer.
//! * [`utilities`]: name extraction, clearing, ID-line removal, markdown
//!   stubs from `.txt` names, vocabulary table for a folder.
//! * [`vault`]: folder listing and output paths.
//! * [`config`]: persisted settings.

pub mod batch;
pub mod config;
pub mod llm;
pub mod utilities;
pub mod vault;
pub mod vocab;
