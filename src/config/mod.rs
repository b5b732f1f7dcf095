//! Configuration module for language detection
//!
//! This module provides the `DetectorConfig` struct and its builder for
//! tuning the sample cap and choosing which detectors take part in a
//! classification.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::DetectorConfigBuilder;
pub use types::DetectorConfig;
