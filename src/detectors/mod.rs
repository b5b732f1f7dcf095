//! Per-language detectors
//!
//! Each detector is a pure function over a [`DetectionContext`] returning a
//! language label or `None`. Detectors check for tells of confusable
//! languages first and bail out early, then look for unambiguous idioms, and
//! finally fall back to weighted scoring where no single idiom decides.
//!
//! The `extended` family covers the long tail of languages that only get a
//! look once every core detector has declined.

pub mod scoring;

pub mod cpp;
pub mod csharp;
pub mod css;
pub mod dart;
pub mod go;
pub mod html;
pub mod java;
pub mod javascript;
pub mod kotlin;
pub mod markdown;
pub mod php;
pub mod python;
pub mod ruby;
pub mod rust;
pub mod scala;
pub mod shebang;
pub mod shell;
pub mod sql;
pub mod swift;

pub mod extended;

use crate::context::DetectionContext;

/// A language detector: inspects the shared context and names a language
pub trait Detector: Send + Sync {
    fn detect(&self, ctx: &DetectionContext<'_>) -> Option<&'static str>;
}

impl<F> Detector for F
where
    F: Fn(&DetectionContext<'_>) -> Option<&'static str> + Send + Sync,
{
    fn detect(&self, ctx: &DetectionContext<'_>) -> Option<&'static str> {
        self(ctx)
    }
}
