//! Error types for detector configuration
//!
//! Classification itself is infallible: a detector that cannot decide
//! answers `None`. Only building a [`crate::LanguageDetector`] from a
//! configuration can fail.

use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error types for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sample cap must allow at least one character
    #[error("Invalid sample character limit: {0} (must be greater than zero)")]
    InvalidSampleLimit(usize),

    /// A disabled detector name is not in the registry
    #[error("Unknown detector '{0}'")]
    UnknownDetector(String),

    /// Configuration document could not be parsed
    #[error("Failed to parse detector configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// True if the error came from the configuration document itself
    /// rather than from a value it carried
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ConfigError::Parse(_))
    }
}
