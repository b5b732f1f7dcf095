//! JavaScript family detector
//!
//! Resolves one snippet into typescript, tsx, jsx, vue, svelte, astro or
//! plain javascript. Comments are stripped before any pattern runs because
//! they routinely carry code-looking prose.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{Scorecard, Signal, Weight::*, pattern, pattern_set};
use crate::context::DetectionContext;

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| pattern(r"(?s)/\*.*?\*/"));

/// `//` not preceded by `:` so URLs survive
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)(^|[^:])//.*$"));

static MARKDOWN_FENCE: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^\s*```"));

static NODE_SHEBANG: Lazy<Regex> = Lazy::new(|| pattern(r"^#!.*\bnode\b"));

/// Any one of these settles TypeScript
static TYPESCRIPT_DECISIVE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\bconstructor\s*\(\s*(public|private|protected|readonly)\s+\w+",
        r"\bfunction\s*\*?\s*\w*\s*(<[^>]*>)?\s*\(\s*\w+\??\s*:\s*[\w\[\]<>|.]+",
        r"\b(const|let|var)\s+\w+\s*:\s*[\w\[\]<>|. ]+\s*=",
        r"\(\s*\w+\??\s*:\s*[\w\[\]<>|.]+\s*(,\s*\w+\??\s*:\s*[\w\[\]<>|.]+\s*)*\)\s*(:\s*[\w\[\]<>|.]+\s*)?=>",
    ])
});

static TYPESCRIPT_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "typescript",
        &[
            Signal::new(r"\binterface\s+\w+(\s+extends\s+[\w, ]+)?\s*\{", Weak),
            Signal::new(r"(?m)^\s*(export\s+)?type\s+\w+(<[^>]*>)?\s*=", Weak),
            Signal::new(r"\babstract\s+class\b", Weak),
            Signal::new(r"\bclass\s+\w+.*\bimplements\s+\w+", Weak),
            Signal::new(r"\b(public|private|protected|readonly)\s+\w+\??\s*:\s*\w", Weak),
            Signal::new(r"\w<[A-Z]\w*(\[\])?(,\s*[A-Z]\w*(\[\])?)*>\s*[(=]", Weak),
            Signal::new(r"\)\s*:\s*(Promise|Array)<", Weak),
            Signal::new(r"\bas\s+(string|number|boolean|const|any|unknown)\b", Weak),
            Signal::new(r"(?m)^\s*(export\s+)?(const\s+)?enum\s+\w+\s*\{", Weak),
            Signal::new(r":\s*(string|number|boolean|void|any|unknown|never)\b", Weak),
        ],
    )
});

static JSX_OPEN: Lazy<Regex> =
    Lazy::new(|| pattern(r"(^|[\s(>\{=?:])<([A-Z][\w.]*|[a-z][a-z0-9]*)(\s[^<>]*)?/?>"));

static JSX_CLOSE: Lazy<Regex> = Lazy::new(|| pattern(r"</[A-Za-z][\w.]*\s*>|/>"));

static REACT_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\bclassName\s*=",
        r"\bReact\.\w+",
        r"\bReactDOM\.\w+",
        r"\buse(State|Effect|Memo|Callback|Ref|Context|Reducer)\s*\(",
        r#"from\s+['"]react['"]"#,
    ])
});

static VUE_TEMPLATE: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^\s*<template(\s[^>]*)?>"));

static VUE_SCRIPT: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"<script(\s[^>]*)?>",
        r"\bexport\s+default\s*\{",
        r"\bdefineComponent\s*\(",
        r"\bv-(if|for|model|bind|on)\b",
    ])
});

static SVELTE_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\{#(if|each|await)\b",
        r"(?m)^\s*\$:\s",
        r"\bon:\w+=",
        r"\bbind:\w+=",
        r"\bexport\s+let\s+\w+",
    ])
});

static SCRIPT_TAG: Lazy<Regex> = Lazy::new(|| pattern(r"<script(\s[^>]*)?>"));

static ASTRO_FRONTMATTER: Lazy<Regex> = Lazy::new(|| pattern(r"\A---[ \t]*\n(?s:.*?)\n---"));

static ASTRO_TELLS: Lazy<Regex> = Lazy::new(|| pattern(r#"\bAstro\.\w+|from\s+['"][^'"]+\.astro['"]"#));

static JAVASCRIPT_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "javascript",
        &[
            Signal::new(r"\b(const|let|var)\s+[\w\[\]\{\}, ]+\s*=", Weak),
            Signal::new(r"\bfunction\s*\*?\s*\w*\s*\(", Weak),
            Signal::new(r"=>", Weak),
            Signal::new(r#"(?m)^\s*import\s+.*\s+from\s+['"]"#, Strong),
            Signal::new(r#"\brequire\s*\(\s*['"]"#, Strong),
            Signal::new(r"\bmodule\.exports\b|\bexports\.\w+\s*=", Strong),
            Signal::new(r"\bconsole\.(log|error|warn|info|debug)\s*\(", Strong),
            Signal::new(r"\b(document|window)\.\w+", Strong),
            Signal::new(r"\basync\s+(function\b|\()|\bawait\s+\w", Weak),
            Signal::new(r"[!=]==", Weak),
            Signal::new(r"\.then\s*\(", Weak),
            Signal::new(r"(?m)^\s*export\s+(default|const|function|class|\{)", Strong),
            Signal::new(r"\bJSON\.(parse|stringify)\s*\(", Weak),
            Signal::new(r"\bnew\s+Promise\s*\(", Weak),
            Signal::new(r"\.addEventListener\s*\(", Strong),
            Signal::new(r"\b(undefined|null)\b", Weak),
        ],
    )
});

/// Remove block comments until none are left, then line comments
pub fn strip_comments(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        match BLOCK_COMMENT.replace_all(&current, "") {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => current = next,
        }
    }
    LINE_COMMENT.replace_all(&current, "$1").into_owned()
}

fn is_typescript(code: &str) -> bool {
    TYPESCRIPT_DECISIVE.is_match(code) || TYPESCRIPT_SIGNALS.clears(code, 2)
}

fn has_jsx(code: &str) -> bool {
    JSX_OPEN.is_match(code) && JSX_CLOSE.is_match(code)
}

fn template_flavor(code: &str) -> Option<&'static str> {
    if VUE_TEMPLATE.is_match(code) && VUE_SCRIPT.is_match(code) {
        return Some("vue");
    }
    if SCRIPT_TAG.is_match(code) && SVELTE_TELLS.is_match(code) {
        return Some("svelte");
    }
    if ASTRO_FRONTMATTER.is_match(code) && ASTRO_TELLS.is_match(code) {
        return Some("astro");
    }
    None
}

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if NODE_SHEBANG.is_match(ctx.first_line) {
        return Some("javascript");
    }

    if MARKDOWN_FENCE.is_match(&ctx.first_100_lines) {
        return None;
    }

    let code = strip_comments(&ctx.first_100_lines);

    // Single-file components wrap script in markup, so the wrapper decides
    if let Some(flavor) = template_flavor(&code) {
        return Some(flavor);
    }

    // Bare markup with no script in it is left to the xml detector
    if code.trim_start().starts_with('<') && !ctx.has_curly_braces {
        return None;
    }

    let typescript = is_typescript(&code);
    let jsx = has_jsx(&code);

    if typescript {
        return Some(if jsx { "tsx" } else { "typescript" });
    }
    if jsx || REACT_TELLS.is_match(&code) {
        return Some("jsx");
    }

    JAVASCRIPT_SIGNALS.clears(&code, 3).then_some("javascript")
}
