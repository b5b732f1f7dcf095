//! Fluent builder for `DetectorConfig`

use super::types::DetectorConfig;
use crate::errors::ConfigResult;

/// Builder for [`DetectorConfig`]; every field starts at its default
#[derive(Debug, Clone, Default)]
pub struct DetectorConfigBuilder {
    config: DetectorConfig,
}

impl DetectorConfig {
    /// Create a builder for configuring a `DetectorConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::default()
    }
}

impl DetectorConfigBuilder {
    #[must_use]
    pub fn sample_char_limit(mut self, limit: usize) -> Self {
        self.config.sample_char_limit = limit;
        self
    }

    #[must_use]
    pub fn extended_detectors(mut self, enabled: bool) -> Self {
        self.config.extended_detectors = enabled;
        self
    }

    /// Skip one registered detector by name
    #[must_use]
    pub fn disable_detector(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.config.disabled_detectors.contains(&name) {
            self.config.disabled_detectors.push(name);
        }
        self
    }

    #[must_use]
    pub fn disabled_detectors<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |builder, name| builder.disable_detector(name))
    }

    /// Validate and produce the configuration
    pub fn build(self) -> ConfigResult<DetectorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    #[test]
    fn test_builder_defaults_match_default() {
        let built = DetectorConfig::builder().build().expect("defaults are valid");
        assert_eq!(built, DetectorConfig::default());
    }

    #[test]
    fn test_zero_sample_limit_rejected() {
        let err = DetectorConfig::builder().sample_char_limit(0).build();
        assert!(matches!(err, Err(ConfigError::InvalidSampleLimit(0))));
    }

    #[test]
    fn test_disable_detector_deduplicates() {
        let config = DetectorConfig::builder()
            .disable_detector("go")
            .disabled_detectors(["go", "rust"])
            .build()
            .expect("known detectors");
        assert_eq!(config.disabled_detectors(), ["go", "rust"]);
    }
}
