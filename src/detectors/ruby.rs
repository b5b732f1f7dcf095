use once_cell::sync::Lazy;
use regex::RegexSet;

use super::scoring::{Scorecard, Signal, Weight::*, pattern_set};
use crate::context::DetectionContext;

/// Scala and Elixir both write `def ... end`-looking code
static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        // Scala
        r"\bdef\s+\w+\s*\([^)]*\w+\s*:\s*[A-Z]\w*",
        r"\bobject\s+\w+\s+extends\b",
        r"\bcase\s+class\b",
        r"(?m)^\s*val\s+\w+",
        // Elixir
        r"(?m)^\s*defmodule\s",
        r"\|>",
        r"\bdo:\s",
        r"\bfn\s+[\w,\s]*->",
        // Python-style definitions end in a colon
        r"(?m)^\s*def\s+\w+\s*\([^)]*\)\s*:\s*$",
        // Lua and Julia close `function` blocks with `end`
        r"(?m)^\s*(local\s+)?function\s+[\w.:]+\s*\(",
    ])
});

static RUBY_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "ruby",
        &[
            Signal::new(r"(?m)^\s*def\s+(self\.)?[\w?!=]+", Weak),
            Signal::new(r"(?m)^\s*end\s*$", Strong),
            Signal::new(r"(?m)^\s*require(_relative)?\s+['\x22]", Strong),
            Signal::new(r"\battr_(accessor|reader|writer)\b", Strong),
            Signal::new(r"(\bdo|\{)\s*\|[\w, ]+\|", Strong),
            Signal::new(r"\bputs\b", Weak),
            Signal::new(r"(?m)^\s*@\w+\s*=", Weak),
            Signal::new(r":\w+\s*=>", Weak),
            Signal::new(r"\bunless\b", Weak),
            Signal::new(r"\bnil\b", Weak),
            Signal::new(r"#\{[^}\n]+\}", Weak),
            Signal::new(r"(?m)^\s*class\s+\w+\s*<\s*[A-Z][\w:]*", Strong),
            Signal::new(r"(?m)^\s*module\s+[A-Z]\w*\s*$", Weak),
            Signal::new(r"\.each(_with_index)?\b", Weak),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if ctx.first_line.starts_with("#!") && ctx.first_line.contains("ruby") {
        return Some("ruby");
    }

    let text = ctx.first_100_lines.as_str();
    if CONFUSABLE.is_match(text) {
        return None;
    }

    RUBY_SIGNALS.clears(text, 3).then_some("ruby")
}
