//! Configurable dispatch engine
//!
//! `LanguageDetector` resolves a [`DetectorConfig`] against the static
//! registry once, then classifies snippets by walking the active detectors in
//! ascending priority and returning the first label any of them produces.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::DetectorConfig;
use crate::context::DetectionContext;
use crate::errors::ConfigResult;
use crate::registry::{self, DetectorEntry, DetectorTier};

/// A positive classification with the detector that made it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub label: &'static str,
    pub detector: &'static str,
    pub priority: u16,
}

/// Emitted to the trace hook whenever a detector matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    pub detector: &'static str,
    pub priority: u16,
    pub label: &'static str,
    /// Number of detectors consulted, including the matching one
    pub consulted: usize,
}

type TraceHook = Arc<dyn Fn(&TraceEvent) + Send + Sync>;

/// Heuristic language classifier over a filtered view of the registry
#[derive(Clone)]
pub struct LanguageDetector {
    config: DetectorConfig,
    active: Vec<&'static DetectorEntry>,
    hook: Option<TraceHook>,
}

impl LanguageDetector {
    /// Validate `config` and select the detectors it enables
    pub fn new(config: DetectorConfig) -> ConfigResult<Self> {
        config.validate()?;

        let active = registry::entries()
            .iter()
            .filter(|entry| config.extended_detectors() || entry.tier == DetectorTier::Core)
            .filter(|entry| !config.is_disabled(entry.name))
            .collect();

        Ok(Self {
            config,
            active,
            hook: None,
        })
    }

    /// Attach a callback invoked with every match
    #[must_use]
    pub fn with_trace_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&TraceEvent) + Send + Sync + 'static,
    {
        self.hook = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Names of the active detectors in dispatch order
    #[must_use]
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.active.iter().map(|entry| entry.name).collect()
    }

    /// Classify `code`, returning a language label or `None`
    #[must_use]
    pub fn detect(&self, code: &str) -> Option<&'static str> {
        self.detect_with_trace(code).map(|detection| detection.label)
    }

    /// Classify `code` and report which detector decided
    #[must_use]
    pub fn detect_with_trace(&self, code: &str) -> Option<Detection> {
        if code.trim().is_empty() {
            trace!("empty input, skipping detection");
            return None;
        }

        let ctx = DetectionContext::with_sample_limit(code, self.config.sample_char_limit());

        for (index, entry) in self.active.iter().enumerate() {
            let Some(label) = entry.detector().detect(&ctx) else {
                trace!(detector = entry.name, priority = entry.priority, "declined");
                continue;
            };

            debug!(
                detector = entry.name,
                priority = entry.priority,
                label,
                "language detected"
            );

            if let Some(hook) = &self.hook {
                hook(&TraceEvent {
                    detector: entry.name,
                    priority: entry.priority,
                    label,
                    consulted: index + 1,
                });
            }

            return Some(Detection {
                label,
                detector: entry.name,
                priority: entry.priority,
            });
        }

        trace!(consulted = self.active.len(), "no detector matched");
        None
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        let config = DetectorConfig::default();
        Self {
            active: registry::entries().iter().collect(),
            config,
            hook: None,
        }
    }
}

impl std::fmt::Debug for LanguageDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageDetector")
            .field("config", &self.config)
            .field("active", &self.detector_names())
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_every_detector() {
        let detector = LanguageDetector::default();
        assert_eq!(detector.detector_names().len(), registry::entries().len());
    }

    #[test]
    fn test_core_only() {
        let config = DetectorConfig::builder()
            .extended_detectors(false)
            .build()
            .expect("valid config");
        let detector = LanguageDetector::new(config).expect("valid config");
        assert_eq!(detector.detector_names().len(), 19);
        assert_eq!(detector.detector_names().last(), Some(&"markdown"));
    }

    #[test]
    fn test_disabled_detector_is_skipped() {
        let config = DetectorConfig::builder()
            .disable_detector("shebang")
            .build()
            .expect("valid config");
        let detector = LanguageDetector::new(config).expect("valid config");
        assert!(!detector.detector_names().contains(&"shebang"));
        // the python detector still recognises its own env shebang
        assert_eq!(
            detector.detect("#!/usr/bin/env python\nprint('hi')"),
            Some("python")
        );
    }

    #[test]
    fn test_trace_reports_detector() {
        let detection = LanguageDetector::default()
            .detect_with_trace("<?php echo 'hi'; ?>")
            .expect("php detected");
        assert_eq!(detection.label, "php");
        assert_eq!(detection.detector, "php");
        assert_eq!(detection.priority, 2);
    }

    #[test]
    fn test_whitespace_is_none() {
        assert_eq!(LanguageDetector::default().detect(" \n\t "), None);
    }
}
