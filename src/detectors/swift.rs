use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{Scorecard, Signal, Weight::*, pattern, pattern_set};
use crate::context::DetectionContext;

static APPLE_IMPORT: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?m)^\s*import\s+(SwiftUI|UIKit|Foundation|Cocoa|Combine|XCTest|AppKit|SwiftData)\s*$")
});

/// Objective-C and Go
static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*#import\b",
        r"(?m)^\s*@(interface|implementation)\b",
        r"(?m)^package\s+\w+\s*$",
        r"\w\s*:=",
        r"\bfmt\.\w+\(",
    ])
});

static SWIFT_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "swift",
        &[
            Signal::new(r#""[^"\n]*\\\([^)]*\)[^"\n]*""#, Decisive),
            Signal::new(r"\bif\s+let\s+\w+", Strong),
            Signal::new(r"\bguard\s+let\s+\w+", Decisive),
            Signal::new(r"\bfunc\s+\w+\s*(<[^>]*>)?\s*\([^)]*\)\s*(async\s+)?(throws\s+)?(->|\{)", Strong),
            Signal::new(r"\b(let|var)\s+\w+\s*:\s*\[?[A-Z]\w*", Weak),
            Signal::new(r"@(State|Binding|Published|ObservedObject|EnvironmentObject|MainActor|objc|escaping|discardableResult|main)\b", Strong),
            Signal::new(r"\bstruct\s+\w+\s*:\s*\w+", Weak),
            Signal::new(r"\boverride\s+func\b", Strong),
            Signal::new(r"(?m)^\s*extension\s+[A-Z]\w*", Strong),
            Signal::new(r"(?m)^\s*protocol\s+[A-Z]\w*", Strong),
            Signal::new(r"\?\?", Weak),
            Signal::new(r"\bprint\(", Weak),
            Signal::new(r"\bvar\s+body\s*:\s*some\s+View\b", Decisive),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    if APPLE_IMPORT.is_match(text) {
        return Some("swift");
    }

    if CONFUSABLE.is_match(text) {
        return None;
    }

    SWIFT_SIGNALS.clears(text, 3).then_some("swift")
}
