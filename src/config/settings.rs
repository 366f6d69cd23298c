//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::llm::ProviderId;

/// Instruction used when neither the command line nor the settings file
/// supplies one.
pub const DEFAULT_PROMPT: &str = "Process the following content:";

// ---------------------------------------------------------------------------
// ApiKeys
// ---------------------------------------------------------------------------

/// One credential slot per provider.
///
/// Each Gemini model has its own slot so different keys (and quotas) can be
/// used per model.  Empty strings are treated exactly like a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeys {
    pub gemini: Option<String>,
    pub gemini_25_flash: Option<String>,
    pub gemini_25_pro: Option<String>,
    pub claude: Option<String>,
    pub perplexity: Option<String>,
}

impl ApiKeys {
    /// Return the configured key for `provider`, or `None` when the slot is
    /// unset or blank.
    pub fn key_for(&self, provider: ProviderId) -> Option<&str> {
        let slot = match provider {
            ProviderId::Gemini => &self.gemini,
            ProviderId::Gemini25Flash => &self.gemini_25_flash,
            ProviderId::Gemini25Pro => &self.gemini_25_pro,
            ProviderId::Claude => &self.claude,
            ProviderId::Perplexity => &self.perplexity,
        };
        slot.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    /// Store `key` in the slot for `provider`.
    pub fn set(&mut self, provider: ProviderId, key: impl Into<String>) {
        let slot = match provider {
            ProviderId::Gemini => &mut self.gemini,
            ProviderId::Gemini25Flash => &mut self.gemini_25_flash,
            ProviderId::Gemini25Pro => &mut self.gemini_25_pro,
            ProviderId::Claude => &mut self.claude,
            ProviderId::Perplexity => &mut self.perplexity,
        };
        *slot = Some(key.into());
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use note_processor::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Provider used when the command line does not name one.
    pub default_provider: ProviderId,
    /// Instruction used when the command line does not supply one.
    pub default_prompt: String,
    /// Provider credentials.
    pub api_keys: ApiKeys,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: ProviderId::default(),
            default_prompt: DEFAULT_PROMPT.into(),
            api_keys: ApiKeys::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// so callers never need to special-case a missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
