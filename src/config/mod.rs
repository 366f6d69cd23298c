//! Configuration module for the note processor.
//!
//! Provides `AppConfig` (top-level settings), the per-provider `ApiKeys`
//! table, `AppPaths` for the platform config directory, and TOML persistence
//! via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{ApiKeys, AppConfig, DEFAULT_PROMPT};
