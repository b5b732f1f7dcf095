use once_cell::sync::Lazy;
use regex::RegexSet;

use super::scoring::{Scorecard, Signal, Weight::*, pattern_set};
use crate::context::DetectionContext;

/// Go package files and JS/TS modules
static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*package\s+\w+\s*$[\s\S]*\bfunc\s",
        r"\bfunc\s+\w+\s*\(",
        r"\b(const|let)\s+\w+\s*[:=]",
        r"\bfunction\s*\w*\s*\(",
        r"console\.\w+\(",
        r"(?m)^\s*(import|export)\s.*\bfrom\s+['\x22]",
        r"\bfun\s+\w+\s*\(",
    ])
});

static DECISIVE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\bobject\s+\w+\s+extends\s+App\b",
        r"\bcase\s+(class|object)\s+\w+",
        r"\bdef\s+main\s*\(\s*args\s*:\s*Array\[String\]\s*\)",
        r"(?m)^\s*import\s+scala\.",
        r"\bsealed\s+(trait|abstract\s+class)\s+\w+",
        r"\bimplicit\s+(val|def|class)\b",
    ])
});

static SCALA_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "scala",
        &[
            Signal::new(r"\bdef\s+\w+(\[[^\]]*\])?\s*(\([^)]*\))*\s*(:\s*[\w\[\], ]+)?\s*=", Strong),
            Signal::new(r"\bval\s+\w+\s*(:\s*[\w\[\], ]+)?\s*=", Weak),
            Signal::new(r"\bvar\s+\w+\s*:\s*[A-Z]\w*", Weak),
            Signal::new(r"(?m)^\s*object\s+\w+", Strong),
            Signal::new(r"(?m)^\s*trait\s+\w+", Weak),
            Signal::new(r"\bmatch\s*\{", Strong),
            Signal::new(r"(?m)^\s*case\s+[^=\n]*=>", Weak),
            Signal::new(r"\b(Option|List|Seq|Map|Future|Array)\[[A-Z]\w*", Strong),
            Signal::new(r"\bextends\s+\w+(\s+with\s+\w+)+", Strong),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    if CONFUSABLE.is_match(text) {
        return None;
    }

    if DECISIVE.is_match(text) {
        return Some("scala");
    }

    SCALA_SIGNALS.clears(text, 3).then_some("scala")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scala(code: &str) -> Option<&'static str> {
        detect(&DetectionContext::new(code))
    }

    #[test]
    fn test_app_object() {
        assert_eq!(scala("object Hello extends App {\n  println(\"hi\")\n}"), Some("scala"));
    }

    #[test]
    fn test_typed_defs() {
        let code = "object MathUtil {\n  def add(a: Int, b: Int): Int = a + b\n  val zero = 0\n}";
        assert_eq!(scala(code), Some("scala"));
    }

    #[test]
    fn test_pattern_match() {
        let code = "def describe(x: Any): String = x match {\n  case 1 => \"one\"\n  case _ => \"many\"\n}";
        assert_eq!(scala(code), Some("scala"));
    }

    #[test]
    fn test_go_is_excluded() {
        assert_eq!(scala("package main\n\nfunc main() {\n}"), None);
    }

    #[test]
    fn test_javascript_is_excluded() {
        assert_eq!(scala("const double = (x) => x * 2;\nval = 1"), None);
    }
}
