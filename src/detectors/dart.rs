use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{Scorecard, Signal, Weight::*, pattern, pattern_set};
use crate::context::DetectionContext;

static DART_IMPORT: Lazy<Regex> =
    Lazy::new(|| pattern(r#"(?m)^\s*import\s+['"](dart|package):"#));

/// Java, C#, Kotlin and TypeScript all look like Dart at a glance
static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"System\.out\.print",
        r"\bpublic\s+static\s+void\s+main\b",
        r"(?m)^\s*using\s+System",
        r"(?m)^\s*import\s+(java|javax|kotlin|kotlinx|android)\.",
        r"\bfun\s+\w+\s*\(",
        r"\bConsole\.Write",
        r"(?m)^\s*#include\b",
        r"\bfunction\s+\w+\s*\(",
        r"console\.log\(",
    ])
});

static DART_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "dart",
        &[
            Signal::new(r"\bWidget\s+build\s*\(\s*BuildContext\b", Decisive),
            Signal::new(r"\bextends\s+(StatelessWidget|StatefulWidget|State<\w+>)", Decisive),
            Signal::new(r"\brequired\s+this\.\w+", Strong),
            Signal::new(r"\blate\s+(final\s+)?\w+", Strong),
            Signal::new(r"\bFuture<[\w<>?]+>\s+\w+\s*\([^)]*\)\s*async\b", Strong),
            Signal::new(r"\bsetState\s*\(\s*\(\)", Strong),
            Signal::new(r"(?m)^\s*void\s+main\s*\(\s*\)", Weak),
            Signal::new(r"\bprint\s*\(\s*'[^'\n]*\$", Strong),
            Signal::new(r"'[^'\n]*\$\{[^}]+\}[^'\n]*'", Weak),
            Signal::new(r"\bfinal\s+\w+\s*=", Weak),
            Signal::new(r"\b(String|int|double|bool)\?\s+\w+", Weak),
            Signal::new(r"@override\b", Weak),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    if DART_IMPORT.is_match(text) {
        return Some("dart");
    }

    if !ctx.has_curly_braces || CONFUSABLE.is_match(text) {
        return None;
    }

    DART_SIGNALS.clears(text, 3).then_some("dart")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dart(code: &str) -> Option<&'static str> {
        detect(&DetectionContext::new(code))
    }

    #[test]
    fn test_dart_imports() {
        assert_eq!(dart("import 'dart:async';"), Some("dart"));
        assert_eq!(
            dart("import \"package:flutter/material.dart\";\n"),
            Some("dart")
        );
    }

    #[test]
    fn test_flutter_widget() {
        let code = r#"class Counter extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    return Text('hi');
  }
}"#;
        assert_eq!(dart(code), Some("dart"));
    }

    #[test]
    fn test_plain_main_with_interpolation() {
        let code = "void main() {\n  final name = 'Bob';\n  print('Hello $name');\n}";
        assert_eq!(dart(code), Some("dart"));
    }

    #[test]
    fn test_java_main_is_excluded() {
        let code = "public class Main {\n  public static void main(String[] args) {\n    System.out.println(\"x\");\n  }\n}";
        assert_eq!(dart(code), None);
    }

    #[test]
    fn test_requires_braces() {
        assert_eq!(dart("print('Hello $name')"), None);
    }
}
