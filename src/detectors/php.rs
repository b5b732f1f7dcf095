use once_cell::sync::Lazy;
use regex::RegexSet;

use super::scoring::{Scorecard, Signal, Weight::*, pattern_set};
use crate::context::DetectionContext;

/// Perl shares `$var` and `->` with PHP
static PERL_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*use\s+(strict|warnings)\s*;",
        r"\bmy\s+[\$@%]\w+",
        r"(?m)^\s*sub\s+\w+\s*\{",
    ])
});

static PHP_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "php",
        &[
            Signal::new(r"\$this->", Strong),
            Signal::new(r"\bfunction\s+\w+\s*\([^)]*\$\w+", Strong),
            Signal::new(r"\b(public|private|protected)\s+(static\s+)?function\b", Strong),
            Signal::new(r"(?m)^\s*namespace\s+[A-Z]\w*(\\\w+)*\s*;", Strong),
            Signal::new(r"(?m)^\s*use\s+[A-Z]\w*(\\\w+)+\s*;", Strong),
            Signal::new(r"\$\w+\s*->\s*\w+", Weak),
            Signal::new(r"\becho\s+\$\w+", Weak),
            Signal::new(r"\$\w+\s*=\s*[^;]+;", Weak),
            Signal::new(r"\barray\s*\(", Weak),
            Signal::new(r"\b(isset|empty|unset|array_map|array_filter|count|strlen|explode|implode)\s*\(\s*\$", Strong),
            Signal::new(r"\$_(GET|POST|SERVER|SESSION|REQUEST|COOKIE)\b", Decisive),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    if text.contains("<?php") || ctx.first_line.starts_with("<?=") {
        return Some("php");
    }

    if !text.contains('$') || PERL_TELLS.is_match(text) {
        return None;
    }

    PHP_SIGNALS.clears(text, 3).then_some("php")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn php(code: &str) -> Option<&'static str> {
        detect(&DetectionContext::new(code))
    }

    #[test]
    fn test_open_tag() {
        assert_eq!(php("<?php echo 'hi'; ?>"), Some("php"));
        assert_eq!(php("<html><?php echo $x; ?></html>"), Some("php"));
    }

    #[test]
    fn test_tagless_class_body() {
        let code = r#"namespace App\Http;

class UserController {
    public function show($id) {
        return $this->repo->find($id);
    }
}"#;
        assert_eq!(php(code), Some("php"));
    }

    #[test]
    fn test_perl_is_excluded() {
        let code = "use strict;\nmy $self = shift;\nreturn $self->{name};";
        assert_eq!(php(code), None);
    }

    #[test]
    fn test_shell_variables_are_not_php() {
        assert_eq!(php("echo $HOME\ncd $HOME/src"), None);
    }
}
