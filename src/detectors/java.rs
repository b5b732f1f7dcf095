use once_cell::sync::Lazy;
use regex::RegexSet;

use super::scoring::{Scorecard, Signal, Weight::*, pattern_set};
use crate::context::DetectionContext;

/// Kotlin, Scala, Groovy and TypeScript share Java's surface syntax
static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\bfun\s+\w+\s*\(",
        r"(?m)^\s*val\s+\w+",
        r"\bdef\s+\w+",
        r"(?m)^\s*(case\s+class|object)\s+\w+",
        r"\b(const|let)\s+\w+\s*[:=]",
        r"\bfunction\s*\w*\s*\(",
        r"console\.\w+\(",
        r":\s*(string|number|boolean|any|void)\b",
        r"(?m)^\s*#include\b",
        r"(?m)^\s*using\s+[\w.]+\s*;",
        r"\bfunc\s+\w+",
    ])
});

static DECISIVE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\bpublic\s+static\s+void\s+main\s*\(\s*(final\s+)?String",
        r"\bSystem\.(out|err)\.print",
        r"(?m)^\s*package\s+[\w.]+\s*;",
        r"(?m)^\s*import\s+(static\s+)?(java|javax|jakarta|org|com|android|lombok)\.[\w.*]+\s*;",
    ])
});

static JAVA_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "java",
        &[
            Signal::new(r"\b(public|private|protected)\s+(static\s+)?(final\s+)?(synchronized\s+)?[\w<>\[\],?]+\s+\w+\s*\([^)]*\)\s*(throws\s+[\w.,\s]+)?\{", Strong),
            Signal::new(r"@(Override|Autowired|Test|Component|Service|Entity|RestController|GetMapping|PostMapping|FunctionalInterface|Deprecated|SuppressWarnings)\b", Strong),
            Signal::new(r"\b(public|final|abstract)\s+(class|interface|enum|record)\s+\w+", Strong),
            Signal::new(r"\bclass\s+\w+(<[^>]*>)?\s+(extends\s+\w+\s+)?implements\s+\w+", Strong),
            Signal::new(r"\bnew\s+[A-Z]\w*(<[^>]*>)?\s*\(", Weak),
            Signal::new(r"\b(String|Integer|Long|Boolean|List|Map|Set|ArrayList|HashMap|Optional)(<[^>]*>|\[\])?\s+\w+\s*[=;]", Weak),
            Signal::new(r"\bthrows\s+\w+", Strong),
            Signal::new(r"\b(private|protected|public)\s+(static\s+)?final\s+\w+", Weak),
            Signal::new(r"\.stream\(\)", Weak),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    if CONFUSABLE.is_match(text) {
        return None;
    }

    if DECISIVE.is_match(text) {
        return Some("java");
    }

    JAVA_SIGNALS.clears(text, 3).then_some("java")
}
