//! Heuristic source-language detection
//!
//! [`guess_language`] names the programming or markup language of a code
//! snippet, or returns `None` when nothing is confident enough. Detection is a
//! fixed-priority cascade of per-language detectors over a shared, capped
//! view of the input; the first detector to answer wins.
//!
//! ```
//! use kodegen_tools_langdetect::guess_language;
//!
//! assert_eq!(guess_language("<?php echo 'hi'; ?>"), Some("php"));
//! assert_eq!(guess_language("   "), None);
//! ```

pub mod config;
pub mod context;
pub mod detector;
pub mod detectors;
pub mod errors;
pub mod registry;

use once_cell::sync::Lazy;

pub use config::{DetectorConfig, DetectorConfigBuilder};
pub use context::{DEFAULT_SAMPLE_CHAR_LIMIT, DetectionContext};
pub use detector::{Detection, LanguageDetector, TraceEvent};
pub use detectors::Detector;
pub use errors::{ConfigError, ConfigResult};
pub use registry::{DetectorEntry, DetectorTier, KNOWN_LANGUAGES, is_known_language};

static DEFAULT_DETECTOR: Lazy<LanguageDetector> = Lazy::new(LanguageDetector::default);

/// Guess the language of `code` with the default configuration
///
/// Empty or whitespace-only input yields `None`. The result is a lowercase
/// tag from [`KNOWN_LANGUAGES`].
#[must_use]
pub fn guess_language(code: &str) -> Option<&'static str> {
    DEFAULT_DETECTOR.detect(code)
}
