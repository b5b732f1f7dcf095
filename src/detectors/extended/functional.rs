//! Functional and logic languages

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use crate::context::DetectionContext;
use crate::detectors::scoring::{Scorecard, Signal, Weight::*, count_matches, pattern, pattern_set};

/// Elm shares Haskell's module and signature syntax
static ELM_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*(port\s+)?module\s+[A-Z][\w.]*\s+exposing\b",
        r"(?m)^\s*import\s+[A-Z][\w.]*(\s+as\s+\w+)?\s+exposing\b",
        r"(?m)^\s*type\s+alias\s+\w+",
        r":\s*Html\s+\w+",
        r"\bBrowser\.(sandbox|element|document|application)\b",
    ])
});

static HASKELL_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "haskell",
        &[
            Signal::new(r"(?m)^module\s+[A-Z][\w.]*(\s*\([^)]*\))?\s+where\s*$", Decisive),
            Signal::new(r"(?m)^import\s+(qualified\s+)?[A-Z][\w.]*", Strong),
            Signal::new(r"(?m)^[a-z]\w*'?\s*::\s*.+", Strong),
            Signal::new(r"(?m)^data\s+[A-Z]\w*.*=", Strong),
            Signal::new(r"\bderiving\s*\(?\s*(Show|Eq|Ord|Generic)", Decisive),
            Signal::new(r"(?m)^main\s*=\s*do\b", Decisive),
            Signal::new(r"\b(putStrLn|mapM_|foldr|foldl'?|fmap)\b", Strong),
            Signal::new(r"\w+\s*<-\s*\w", Weak),
            Signal::new(r"(?m)^\s*where\s*$", Weak),
            Signal::new(r"\binstance\s+[A-Z]\w*\s+\w+.*\bwhere\b", Strong),
            Signal::new(r"\\\w+\s*->", Weak),
        ],
    )
});

static ELIXIR_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "elixir",
        &[
            Signal::new(r"(?m)^\s*defmodule\s+[A-Z][\w.]*\s+do\s*$", Decisive),
            Signal::new(r"(?m)^\s*defp?\s+\w+[?!]?(\([^)]*\))?\s*(when\s+.+)?\s*do\s*$", Strong),
            Signal::new(r"\|>", Strong),
            Signal::new(r"%\{", Weak),
            Signal::new(r"\bIO\.(puts|inspect)\b", Strong),
            Signal::new(r",\s*do:\s", Strong),
            Signal::new(r"\bfn\s+[\w, ]*->", Strong),
            Signal::new(r"(?m)^\s*end\s*$", Weak),
            Signal::new(r"(?m)^\s*(use|alias|import|require)\s+[A-Z][\w.]*", Weak),
            Signal::new(r"\{:(ok|error),", Strong),
        ],
    )
});

static ERLANG_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "erlang",
        &[
            Signal::new(r"(?m)^-module\(\w+\)\.", Decisive),
            Signal::new(r"(?m)^-(export|import|record|define|include)\(", Decisive),
            Signal::new(r"(?m)^[a-z]\w*\([^)]*\)\s*(when\s+.+)?->", Strong),
            Signal::new(r"\bio:format\(", Strong),
            Signal::new(r"(?m)\.\s*$", Weak),
            Signal::new(r"\b[a-z]\w*:[a-z]\w*\(", Weak),
        ],
    )
});

static LISP_FORM: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^\s*\(\w"));

static RACKET_LANG: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^#lang\s+(racket|typed/racket|scheme)"));

static CLOJURE_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\((defn-?|ns|def|defmacro|defprotocol|defrecord)\s",
        r"\(fn\s*\[",
        r"(?m)\[[\w\s&]*\]\s*$",
        r"\(println\s",
        r"\(:\w+\s",
    ])
});

static SCHEME_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[r"\(define\s+\(", r"\(define\s+\w", r"\(lambda\s+\(", r"\(display\s"])
});

static COMMON_LISP_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\((defun|defmacro|defvar|defparameter|setq|setf|format\s+t|let\*?\s+\(\()",
        r"(?m)^\s*;;",
    ])
});

static ML_BASE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*let\s+(rec\s+|mutable\s+|inline\s+)?[\w()']+(\s+[\w()':]+)*\s*=",
        r"\bmatch\s+.+\s+with\b",
        r"\bfun\s+\w+\s*->",
    ])
});

static FSHARP_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\bprintfn\b",
        r"(?m)^\s*open\s+System\b",
        r"\[<\w+",
        r"(?m)^\s*member\s+\w+",
        r"\|>",
        r"(?m)^\s*let\s+mutable\b",
        r"(?m)^\s*module\s+\w+\s*=\s*$",
    ])
});

static OCAML_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r";;",
        r"\b(Printf\.printf|print_endline|print_string|List\.iter)\b",
        r"(?m)^\s*let\s+\(\)\s*=",
        r"\(\*",
        r"\bmodule\s+\w+\s*=\s*struct\b",
        r"\bbegin\b[\s\S]*\bend\b",
    ])
});

static ELM_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "elm",
        &[
            Signal::new(r"(?m)^\s*module\s+[A-Z][\w.]*\s+exposing\b", Decisive),
            Signal::new(r"(?m)^\s*import\s+[A-Z][\w.]*(\s+as\s+\w+)?(\s+exposing\b.*)?$", Weak),
            Signal::new(r"(?m)^\s*type\s+alias\s+\w+", Decisive),
            Signal::new(r"(?m)^\s*[a-z]\w*\s*:\s*.+->", Strong),
            Signal::new(r"\bcase\s+\w+\s+of\b", Strong),
            Signal::new(r":\s*Html\s+\w+", Decisive),
        ],
    )
});

static PROLOG_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "prolog",
        &[
            Signal::new(r"(?m)^[a-z]\w*(\([^)]*\))?\s*:-", Decisive),
            Signal::new(r"(?m)^[a-z]\w*\([^()]*\)\.\s*$", Strong),
            Signal::new(r"(?m)^\?-", Decisive),
            Signal::new(r"(?m)^:-\s*(module|use_module|dynamic|initialization)\b", Decisive),
            Signal::new(r"\b(write|writeln|nl|format|member|append)\(", Weak),
        ],
    )
});

pub fn detect_haskell(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    if ELM_TELLS.is_match(text) || (ctx.has_semicolon && ctx.has_curly_braces) {
        return None;
    }
    HASKELL_SIGNALS.clears(text, 3).then_some("haskell")
}

pub fn detect_elixir(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    ELIXIR_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("elixir")
}

pub fn detect_erlang(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    ERLANG_SIGNALS
        .clears(&ctx.first_100_lines, 4)
        .then_some("erlang")
}

pub fn detect_lisp(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    if RACKET_LANG.is_match(ctx.first_line) {
        return Some("racket");
    }
    if !text.starts_with('(') && !text.starts_with(';') {
        return None;
    }

    let opens = text.matches('(').count();
    let closes = text.matches(')').count();
    if count_matches(&LISP_FORM, text) == 0 || opens.abs_diff(closes) > opens / 4 + 2 {
        return None;
    }

    if CLOJURE_TELLS.is_match(text) {
        return Some("clojure");
    }
    if COMMON_LISP_TELLS.is_match(text) {
        return Some("lisp");
    }
    if SCHEME_TELLS.is_match(text) {
        return Some("scheme");
    }
    None
}

pub fn detect_ml(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    if !ML_BASE.is_match(text) || (ctx.has_curly_braces && ctx.has_semicolon && !text.contains(";;")) {
        return None;
    }

    let fsharp = FSHARP_TELLS.matches(text).iter().count();
    let ocaml = OCAML_TELLS.matches(text).iter().count();
    match (fsharp, ocaml) {
        (0, 0) => None,
        (f, o) if f > o => Some("fsharp"),
        _ => Some("ocaml"),
    }
}

pub fn detect_elm(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    ELM_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("elm")
}

pub fn detect_prolog(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if ctx.has_curly_braces {
        return None;
    }
    PROLOG_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("prolog")
}
