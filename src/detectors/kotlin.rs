use once_cell::sync::Lazy;
use regex::RegexSet;

use super::scoring::{Scorecard, Signal, Weight::*, pattern_set};
use crate::context::DetectionContext;

static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\bfunc\s+\w+",
        r"\bdef\s+\w+",
        r"(?m)^\s*(const|let)\s+\w+",
        r"\bfunction\s*\w*\s*\(",
        r"(?m)^\s*#include\b",
    ])
});

static KOTLIN_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "kotlin",
        &[
            Signal::new(r"\bfun\s+(<[^>]*>\s*)?[\w.]+\s*\(", Strong),
            Signal::new(r"\bval\s+\w+\s*(:\s*[\w<>?, ]+)?\s*=", Weak),
            Signal::new(r"\bvar\s+\w+\s*:\s*[A-Z][\w<>?]*", Weak),
            Signal::new(r"\bdata\s+class\s+\w+", Decisive),
            Signal::new(r"\bprintln\s*\(", Weak),
            Signal::new(r"\bwhen\s*(\([^)]*\))?\s*\{", Strong),
            Signal::new(r"\bcompanion\s+object\b", Decisive),
            Signal::new(r"(?m)^\s*import\s+(kotlin|kotlinx|androidx)\.", Decisive),
            Signal::new(r"\?\.\w", Weak),
            Signal::new(r"!!", Weak),
            Signal::new(r":\s*(String|Int|Long|Boolean|Double|Unit|Any)\??\b", Weak),
            Signal::new(r"\bsuspend\s+fun\b", Decisive),
            Signal::new(r"\boverride\s+fun\b", Strong),
            Signal::new(r"(?m)^\s*package\s+[\w.]+\s*$", Weak),
            Signal::new(r"\b(listOf|mutableListOf|mapOf|setOf|arrayOf)\s*[(<]", Strong),
            Signal::new(r"\b(sealed|object|enum)\s+class\s+\w+|\bobject\s+\w+\s*\{", Strong),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if !ctx.has_curly_braces {
        return None;
    }

    let text = ctx.first_100_lines.as_str();
    if CONFUSABLE.is_match(text) {
        return None;
    }

    KOTLIN_SIGNALS.clears(text, 3).then_some("kotlin")
}
