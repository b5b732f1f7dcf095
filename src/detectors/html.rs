use fancy_regex::Regex as FancyRegex;
use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{count_matches, fancy_is_match, fancy_pattern, pattern, pattern_set};
use crate::context::DetectionContext;

static DOCUMENT_MARKER: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)<!doctype\s+html|<html[\s>]"));

static HTML_TAG: Lazy<Regex> = Lazy::new(|| {
    pattern(
        r"(?i)<(div|span|p|a|ul|ol|li|head|body|table|tr|td|th|form|section|article|header|footer|nav|main|h[1-6]|img|input|button|label|script|style|meta|link|title|br|hr|strong|em|select|option|textarea|iframe)(\s[^<>]*)?/?>",
    )
});

/// An element closed by a matching end tag
static CLOSED_ELEMENT: Lazy<FancyRegex> =
    Lazy::new(|| fancy_pattern(r"(?is)<([a-z][a-z0-9]*)\b[^<>]*>.*?</\1\s*>"));

/// Component frameworks and JSX also open with markup
static TEMPLATE_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*<template[\s>]",
        r"<script\s+setup\b",
        r"\bv-(if|for|model|bind|on|show)\b",
        r"\{#(if|each|await)\b",
        r"\bon:\w+=",
        r"\bbind:\w+=",
        r"\bclassName=",
        r"(?m)^\s*(import|export)\s",
        r"(?m)^\s*(const|let|var|function)\s",
        r"<\?xml",
    ])
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    if !text.starts_with('<') || TEMPLATE_TELLS.is_match(text) {
        return None;
    }

    if DOCUMENT_MARKER.is_match(text) {
        return Some("html");
    }

    let tags = count_matches(&HTML_TAG, text);
    if tags >= 2 && fancy_is_match(&CLOSED_ELEMENT, text) {
        return Some("html");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(code: &str) -> Option<&'static str> {
        detect(&DetectionContext::new(code))
    }

    #[test]
    fn test_document() {
        let code = "<!DOCTYPE html>\n<html>\n<head><title>Test</title></head>\n<body></body>\n</html>";
        assert_eq!(html(code), Some("html"));
    }

    #[test]
    fn test_fragment() {
        let code = "<div class=\"card\">\n  <span>Hello</span>\n</div>";
        assert_eq!(html(code), Some("html"));
    }

    #[test]
    fn test_single_tag_is_not_enough() {
        assert_eq!(html("<br>"), None);
    }

    #[test]
    fn test_vue_template_is_excluded() {
        let code = "<template>\n  <div v-if=\"ok\">{{ msg }}</div>\n</template>";
        assert_eq!(html(code), None);
    }

    #[test]
    fn test_xml_is_excluded() {
        let code = "<?xml version=\"1.0\"?>\n<note><to>Tove</to></note>";
        assert_eq!(html(code), None);
    }
}
