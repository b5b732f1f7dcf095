use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{Scorecard, Signal, Weight::*, pattern, pattern_set};
use crate::context::DetectionContext;

static PACKAGE_CLAUSE: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^package\s+\w+\s*$"));

static FUNC_KEYWORD: Lazy<Regex> = Lazy::new(|| pattern(r"\bfunc\s"));

/// Swift also spells functions `func`
static SWIFT_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*(let|var)\s+\w+\s*(:\s*\w+)?\s*=",
        r"\)\s*->\s*\w",
        r"(?m)^\s*import\s+(SwiftUI|UIKit|Foundation|Cocoa|Combine)\s*$",
        r"\bguard\s+let\b",
    ])
});

static GO_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "go",
        &[
            Signal::new(r"\w\s*:=", Strong),
            Signal::new(r"(?m)^func\s+(\([^)]*\)\s*)?\w+\s*\(", Strong),
            Signal::new(r"\bfmt\.\w+\(", Strong),
            Signal::new(r"(?m)^import\s*\(", Strong),
            Signal::new(r"\bgo\s+func\b", Weak),
            Signal::new(r"\bdefer\s+\w", Strong),
            Signal::new(r"\bchan\s+\w|<-\s*\w", Weak),
            Signal::new(r"\binterface\s*\{\s*\}", Weak),
            Signal::new(r"(?m)^package\s+main\s*$", Strong),
            Signal::new(r"\berr\s*!=\s*nil\b", Strong),
            Signal::new(r"(?m)^type\s+\w+\s+(struct|interface)\s*\{", Strong),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    if PACKAGE_CLAUSE.is_match(text) && FUNC_KEYWORD.is_match(text) {
        return Some("go");
    }

    if SWIFT_TELLS.is_match(text) {
        return None;
    }

    GO_SIGNALS.clears(text, 3).then_some("go")
}
