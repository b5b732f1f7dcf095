//! Markup and text formats: XML/SVG, LaTeX, unified diffs

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use crate::context::DetectionContext;
use crate::detectors::scoring::{Scorecard, Signal, Weight::*, pattern, pattern_set};

static ROOT_TAG: Lazy<Regex> = Lazy::new(|| pattern(r"\A<([A-Za-z_][\w:.-]*)[\s>/]"));

static SVG_ROOT: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)<svg[\s>]"));

static LATEX_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "latex",
        &[
            Signal::new(r"\\documentclass(\[[^\]]*\])?\{", Decisive),
            Signal::new(r"\\begin\{document\}", Decisive),
            Signal::new(r"\\usepackage(\[[^\]]*\])?\{", Decisive),
            Signal::new(r"\\(sub)*section\*?\{", Strong),
            Signal::new(r"\\begin\{\w+\*?\}", Strong),
            Signal::new(r"\\end\{\w+\*?\}", Weak),
            Signal::new(r"\\(textbf|textit|emph|cite|label|ref|frac|item|includegraphics)\b", Weak),
            Signal::new(r"\$[^$\n]+\$", Weak),
        ],
    )
});

static DIFF_HEADERS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^diff --git\s",
        r"(?m)^@@ -\d+(,\d+)? \+\d+(,\d+)? @@",
        r"(?m)^--- \S.*\n\+\+\+ \S",
        r"(?m)^Index: \S+\n={5,}",
    ])
});

pub fn detect_xml(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.sample;
    if !text.starts_with('<') || !text.ends_with('>') {
        return None;
    }

    if text.starts_with("<?xml") {
        return Some(if SVG_ROOT.is_match(text) { "svg" } else { "xml" });
    }

    let root = ROOT_TAG.captures(text)?.get(1)?.as_str();
    let closed = text.ends_with(&format!("</{root}>")) || text.ends_with("/>");
    if !closed {
        return None;
    }
    Some(if root.eq_ignore_ascii_case("svg") { "svg" } else { "xml" })
}

pub fn detect_latex(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    LATEX_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("latex")
}

pub fn detect_diff(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    DIFF_HEADERS
        .is_match(&ctx.first_100_lines)
        .then_some("diff")
}
