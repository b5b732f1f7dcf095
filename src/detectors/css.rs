use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{count_matches, pattern, pattern_set};
use crate::context::DetectionContext;

/// Programming-language tells that never appear in a stylesheet
static CODE_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\b(return|switch|case|void|printf|println|echo|func|fn|def|public|private|new|function|await)\b",
        r"\b(var|let|const|val)\s+\w+",
        r"\b(interface|type|enum|struct|class|extends|implements|trait|impl)\s+\w+",
        r"=>",
        r"(?m)^\s*(#include|import\s|package\s|using\s|from\s)",
        r"(?m)^\s*[\w\s*&<>,]*\b\w+\([^)]*\)\s*\{",
        r"\b(if|for|while|switch)\s*\(",
    ])
});

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?m)(^|[{;])\s*-{0,2}[a-zA-Z][\w-]*\s*:\s*[^;{}\n]+;"));

static RULE_OPEN: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?m)^\s*([.#:@*\[a-zA-Z&>~+][^{};]*)\{"));

static AT_RULE: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?m)^\s*@(media|keyframes|font-face|supports|page|charset|layer|container)\b")
});

static SCSS_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*\$[\w-]+\s*:",
        r"(?m)^\s*@(mixin|include|extend|use|forward|function|each|if)\b",
        r"(?m)^\s*&[:.\-\w\[]",
    ])
});

static LESS_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*@[\w-]+\s*:\s*[^;]+;",
        r"(?m)^\s*\.[\w-]+\s*\([^)]*\)\s*;",
        r"\bwhen\s*\(",
    ])
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if !ctx.has_curly_braces {
        return None;
    }

    let text = ctx.first_100_lines.as_str();
    if text.starts_with('{') || text.starts_with('[') || CODE_TELLS.is_match(text) {
        return None;
    }

    let is_stylesheet = AT_RULE.is_match(text)
        || (RULE_OPEN.is_match(text) && count_matches(&DECLARATION, text) >= 1);
    if !is_stylesheet {
        return None;
    }

    if SCSS_TELLS.is_match(text) {
        return Some("scss");
    }
    if LESS_TELLS.is_match(text) {
        return Some("less");
    }
    Some("css")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css(code: &str) -> Option<&'static str> {
        detect(&DetectionContext::new(code))
    }

    #[test]
    fn test_plain_rule() {
        let code = ".container {\n    display: flex;\n    padding: 20px;\n    background-color: #fff;\n}";
        assert_eq!(css(code), Some("css"));
    }

    #[test]
    fn test_media_query() {
        let code = "@media (max-width: 600px) {\n  body { font-size: 14px; }\n}";
        assert_eq!(css(code), Some("css"));
    }

    #[test]
    fn test_scss_nesting() {
        let code = "$primary: #333;\n.nav {\n  color: $primary;\n  &:hover { color: red; }\n}";
        assert_eq!(css(code), Some("scss"));
    }

    #[test]
    fn test_less_variables() {
        let code = "@base: #f04615;\n.box {\n  color: @base;\n}";
        assert_eq!(css(code), Some("less"));
    }

    #[test]
    fn test_json_is_excluded() {
        assert_eq!(css("{\"a\": 1}"), None);
    }

    #[test]
    fn test_typescript_interface_is_excluded() {
        assert_eq!(css("interface Foo {\n  name: string;\n}"), None);
    }

    #[test]
    fn test_c_switch_is_excluded() {
        let code = "switch (x) {\n  default: run();\n}";
        assert_eq!(css(code), None);
    }
}
