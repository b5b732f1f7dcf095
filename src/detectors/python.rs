use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{Scorecard, Signal, Weight::*, pattern, pattern_set};
use crate::context::DetectionContext;

static CODING_LINE: Lazy<Regex> = Lazy::new(|| pattern(r"^#.*\bcoding[:=]\s*[\w.\-]+"));

/// Declarations and shapes that Python never uses
static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        // Swift, JS, Go, Kotlin, Rust, Scala bindings
        r"(?m)^\s*(let|var|val|const|func|fun|fn|proc)\s+\w+",
        // Haskell / Elm type signatures and module headers
        r"(?m)^[a-z]\w*\s*::\s*\S",
        r"(?m)^module\s+[A-Z][\w.]*",
        // Swift / Apple frameworks
        r"(?m)^\s*import\s+(Foundation|UIKit|SwiftUI|Cocoa|Combine)\s*$",
        // Ruby blocks
        r"(?m)^\s*def\s+[\w?!]+\s*(\([^)]*\))?\s*$",
        r"(?m)^\s*#include\b",
        r"(?m)^\s*(public|private|protected)\s+\w+",
    ])
});

static PYTHON_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "python",
        &[
            Signal::new(r"(?m)^\s*(async\s+)?def\s+\w+\s*\([^)]*\)\s*(->\s*[^:]+)?:\s*(#.*)?$", Strong),
            Signal::new(r"(?m)^\s*class\s+\w+(\([^)]*\))?\s*:\s*(#.*)?$", Strong),
            Signal::new(r"(?m)^\s*from\s+[\w.]+\s+import\s+[\w*(]", Strong),
            Signal::new(r"(?m)^\s*import\s+[\w.]+(\s+as\s+\w+)?(\s*,\s*[\w.]+)*\s*$", Strong),
            Signal::new(r"\b__(init|name|main|str|repr|dict|class)__\b", Strong),
            Signal::new(r"(?m)^\s*elif\b.*:\s*$", Strong),
            Signal::new(r"(?m)^\s*(if|for|while|with|try|except|else|finally)\b[^{};]*:\s*(#.*)?$", Weak),
            Signal::new(r"\bself\.\w+", Weak),
            Signal::new(r"\bprint\s*\(", Weak),
            Signal::new(r"\b(True|False|None)\b", Weak),
            Signal::new(r"\blambda\s+[\w, ]*:", Weak),
            Signal::new(r"(?m)^\s*@\w+(\.\w+)*(\(.*\))?\s*$", Weak),
            Signal::new(r#"\bf["'][^"'\n]*\{[^}\n]+\}"#, Weak),
        ],
    )
});

static INDENTED_LINE: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^( {4}|\t)\S"));

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if ctx.first_line.starts_with("#!") && ctx.first_line.contains("python") {
        return Some("python");
    }
    if ctx.lines.iter().take(2).any(|l| CODING_LINE.is_match(l)) {
        return Some("python");
    }

    let text = ctx.first_100_lines.as_str();
    if CONFUSABLE.is_match(text) {
        return None;
    }

    let mut score = PYTHON_SIGNALS.score(text);
    // Indentation-structured code without braces
    if !ctx.has_curly_braces && (INDENTED_LINE.is_match(text) || score > 0) {
        score += 1;
    }

    (score >= 3).then_some("python")
}
