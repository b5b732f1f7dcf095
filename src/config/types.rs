//! Core configuration types for language detection

use serde::{Deserialize, Serialize};

use crate::context::DEFAULT_SAMPLE_CHAR_LIMIT;
use crate::errors::{ConfigError, ConfigResult};
use crate::registry;

/// Settings for a [`crate::LanguageDetector`]
///
/// Missing fields in a serialized document fall back to their defaults, so
/// `{}` is a valid configuration equal to `DetectorConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Maximum number of characters detectors may inspect
    pub(crate) sample_char_limit: usize,
    /// When false only the core tier runs
    pub(crate) extended_detectors: bool,
    /// Registry names skipped during dispatch
    pub(crate) disabled_detectors: Vec<String>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            sample_char_limit: DEFAULT_SAMPLE_CHAR_LIMIT,
            extended_detectors: true,
            disabled_detectors: Vec::new(),
        }
    }
}

impl DetectorConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and detector names against the registry
    pub fn validate(&self) -> ConfigResult<()> {
        if self.sample_char_limit == 0 {
            return Err(ConfigError::InvalidSampleLimit(self.sample_char_limit));
        }

        if let Some(unknown) = self
            .disabled_detectors
            .iter()
            .find(|name| registry::find(name).is_none())
        {
            return Err(ConfigError::UnknownDetector(unknown.clone()));
        }

        Ok(())
    }
}
