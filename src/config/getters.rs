//! Getter methods for `DetectorConfig`

use super::types::DetectorConfig;

impl DetectorConfig {
    #[must_use]
    pub fn sample_char_limit(&self) -> usize {
        self.sample_char_limit
    }

    #[must_use]
    pub fn extended_detectors(&self) -> bool {
        self.extended_detectors
    }

    #[must_use]
    pub fn disabled_detectors(&self) -> &[String] {
        &self.disabled_detectors
    }

    /// True if the named detector is switched off by this configuration
    #[must_use]
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled_detectors.iter().any(|d| d == name)
    }
}
