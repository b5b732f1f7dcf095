use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{count_matches, pattern, pattern_set};
use crate::context::DetectionContext;

/// JavaScript, Objective-C and shader sources
static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"console\.\w+\(",
        r"\bdocument\.\w+",
        r"\brequire\s*\(\s*['\x22]",
        r"\bmodule\.exports\b",
        r"(?m)^\s*(import|export)\s+(\{|\*|default|const|function|class|\w+\s+from)",
        r"(?m)^\s*#import\b",
        r"(?m)^\s*@(interface|implementation|protocol|end)\b",
        r"\bgl_(Position|FragColor|FragCoord|VertexID)\b",
        r"(?m)^\s*#version\s+\d+",
        r"(?m)^\s*(uniform|varying|attribute)\s+\w+\s+\w+\s*;",
        r":\s*SV_\w+",
        r"@(vertex|fragment|compute)\b",
    ])
});

static VAR_DECL: Lazy<Regex> = Lazy::new(|| pattern(r"\bvar\s+\w+\s*="));

static INCLUDE: Lazy<Regex> = Lazy::new(|| pattern(r#"(?m)^\s*#\s*include\s*[<"]"#));

static CPP_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*#\s*include\s*<(iostream|vector|string|map|unordered_map|set|memory|algorithm|functional|thread|mutex|sstream|fstream|optional|utility|array|cstdio|cstdlib|cstring|cmath|chrono|tuple)>",
        r"\bstd::",
        r"(?m)^\s*(class|namespace)\s+\w+",
        r"\btemplate\s*<",
        r"\b(cout|cin|cerr|endl)\b",
        r"\bnew\s+\w+",
        r"\bnullptr\b",
        r"(?m)^\s*(public|private|protected)\s*:",
        r"\busing\s+namespace\b",
        r"\w::\w",
        r"\b(virtual|override|constexpr|noexcept)\b",
    ])
});

/// Enough to call C++ without an include line
static STANDALONE_CPP: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\bstd::\w+",
        r"\b\w+::\w+\s*\(",
        r"\btemplate\s*<",
        r"\b(cout|cin|cerr)\s*(<<|>>)",
    ])
});

static C_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\bprintf\s*\(",
        r"\bmalloc\s*\(",
        r"\bsizeof\s*\(",
        r"\bstruct\s+\w+\s*\{",
        r"(?m)^\s*typedef\s",
        r"\bint\s+main\s*\(",
        r"(?m)^\s*#\s*define\s+\w+",
        r"\bNULL\b",
        r"\bfree\s*\(",
    ])
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    if CONFUSABLE.is_match(text) || count_matches(&VAR_DECL, text) >= 5 {
        return None;
    }

    if INCLUDE.is_match(text) {
        let cpp = ctx.has_double_colon || CPP_TELLS.is_match(text);
        return Some(if cpp { "cpp" } else { "c" });
    }

    if STANDALONE_CPP.is_match(text) {
        return Some("cpp");
    }

    (C_TELLS.matches(text).iter().count() >= 2).then_some("c")
}
