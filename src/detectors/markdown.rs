use once_cell::sync::Lazy;
use regex::Regex;

use super::scoring::{Scorecard, Signal, Weight::*, count_matches, pattern};
use crate::context::DetectionContext;

/// `key: value` lines; YAML comments look like headings
static MAPPING_LINE: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^\s*(-\s+)?[\w.\x22'-]+:(\s|$)"));

static MARKDOWN_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "markdown",
        &[
            Signal::new(r"(?m)^#{1,6}\s+\S", Strong),
            Signal::new(r"(?m)^\s*[-*+]\s+\S", Weak),
            Signal::new(r"(?m)^\s*\d+\.\s+\S", Weak),
            Signal::new(r"\[[^\]\n]+\]\([^)\s]+\)", Strong),
            Signal::new(r"(?m)^\s*```", Strong),
            Signal::new(r"\*\*[^*\n]+\*\*|__[^_\n]+__", Weak),
            Signal::new(r"(?m)^>\s", Weak),
            Signal::new(r"(?m)^\|.*\|\s*$", Weak),
            Signal::new(r"(?m)^\|?\s*:?-{3,}:?\s*\|", Strong),
            Signal::new(r"!\[[^\]\n]*\]\([^)\s]+\)", Strong),
            Signal::new(r"`[^`\n]+`", Weak),
            Signal::new(r"(?m)^(\*\s*){3,}$|^(-\s*){3,}$|^(_\s*){3,}$", Weak),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    let content_lines = ctx
        .lines
        .iter()
        .take(100)
        .filter(|l| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .count();
    let mappings = count_matches(&MAPPING_LINE, text);
    if mappings >= 2 && mappings * 2 >= content_lines {
        return None;
    }

    MARKDOWN_SIGNALS.clears(text, 3).then_some("markdown")
}
