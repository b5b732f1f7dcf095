//! Data and configuration formats: JSON, YAML, TOML, INI

use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::DetectionContext;
use crate::detectors::scoring::pattern;

/// Object opening with a quoted key, for samples cut off by the cap
static JSON_OBJECT_HEAD: Lazy<Regex> = Lazy::new(|| pattern(r#"\A\{\s*"[^"\n]+"\s*:"#));

static YAML_KEY: Lazy<Regex> =
    Lazy::new(|| pattern(r#"^\s*(-\s+)?([\w.-]+|"[^"]+"|'[^']+')\s*:(\s+\S.*)?$"#));

static YAML_ITEM: Lazy<Regex> = Lazy::new(|| pattern(r"^\s*-\s+\S"));

static DOCUMENT_START: Lazy<Regex> = Lazy::new(|| pattern(r"\A(---|%YAML)[ \t]*(\n|$)"));

static SECTION_HEADER: Lazy<Regex> = Lazy::new(|| pattern(r#"^\[\[?[\w.\x22' -]+\]\]?$"#));

static PAIR_KEY: Lazy<Regex> = Lazy::new(|| pattern(r#"^[\w.\x22' -]+$"#));

pub fn detect_json(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let sample = ctx.sample;
    let bracketed = (sample.starts_with('{') && sample.ends_with('}'))
        || (sample.starts_with('[') && sample.ends_with(']'));

    if bracketed {
        return match serde_json::from_str::<serde_json::Value>(sample) {
            Ok(_) => Some("json"),
            Err(e) => {
                tracing::trace!("json trial parse failed: {e}");
                None
            }
        };
    }

    (ctx.is_truncated() && JSON_OBJECT_HEAD.is_match(sample)).then_some("json")
}

pub fn detect_yaml(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if DOCUMENT_START.is_match(ctx.sample) {
        return Some("yaml");
    }

    let mut keys = 0usize;
    let mut others = 0usize;
    for line in ctx.lines.iter().take(100) {
        let t = line.trim();
        if t.is_empty() || t.starts_with('#') {
            continue;
        }
        // YAML never indents with tabs
        if line.starts_with('\t') || t.ends_with(';') || t.ends_with('{') || t.contains(" = ") {
            return None;
        }
        if YAML_KEY.is_match(line) {
            keys += 1;
        } else if !YAML_ITEM.is_match(line) {
            others += 1;
        }
    }

    (keys >= 2 && keys >= others).then_some("yaml")
}

/// Line census over `key = value` files
#[derive(Debug, Default)]
struct KeyValueShape {
    headers: usize,
    typed_pairs: usize,
    bare_pairs: usize,
    semicolon_comments: usize,
    /// `{` openers, bare `}`, `;`-terminated pairs and spaced keys
    code_lines: usize,
    others: usize,
}

impl KeyValueShape {
    fn of(ctx: &DetectionContext<'_>) -> Self {
        let mut shape = Self::default();
        for line in ctx.lines.iter().take(100) {
            let t = line.trim();
            if t.is_empty() || t.starts_with('#') {
                continue;
            }
            if t.starts_with(';') {
                shape.semicolon_comments += 1;
            } else if SECTION_HEADER.is_match(t) {
                shape.headers += 1;
            } else if t.ends_with('{') || t == "}" {
                shape.code_lines += 1;
                shape.others += 1;
            } else if let Some((key, value)) = t.split_once('=')
                && PAIR_KEY.is_match(key.trim())
            {
                let (key, value) = (key.trim(), value.trim());
                if value.ends_with(';') || is_spaced_bare_key(key) {
                    shape.code_lines += 1;
                }
                if is_typed_value(value) {
                    shape.typed_pairs += 1;
                } else {
                    shape.bare_pairs += 1;
                }
            } else {
                shape.others += 1;
            }
        }
        shape
    }

    fn pairs(&self) -> usize {
        self.typed_pairs + self.bare_pairs
    }
}

/// Unquoted key with inner whitespace, legal in INI but not in TOML
fn is_spaced_bare_key(key: &str) -> bool {
    !key.starts_with(['"', '\'']) && key.contains(char::is_whitespace)
}

/// Quoted strings, arrays, inline tables, booleans, numbers and dates
fn is_typed_value(value: &str) -> bool {
    match value.chars().next() {
        Some('"' | '\'' | '[' | '{') => true,
        Some(c) if c.is_ascii_digit() || c == '-' || c == '+' => true,
        _ => matches!(value, "true" | "false" | "inf" | "nan"),
    }
}

pub fn detect_toml(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let shape = KeyValueShape::of(ctx);
    let looks_like_toml = shape.semicolon_comments == 0
        && shape.code_lines == 0
        && shape.bare_pairs == 0
        && shape.typed_pairs >= 1
        && (shape.headers >= 1 || shape.typed_pairs >= 2)
        && shape.others <= shape.typed_pairs;
    looks_like_toml.then_some("toml")
}

pub fn detect_ini(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let shape = KeyValueShape::of(ctx);
    let looks_like_ini = (shape.headers >= 1 || shape.semicolon_comments >= 1)
        && shape.pairs() >= 1
        && shape.others * 2 <= shape.pairs();
    looks_like_ini.then_some("ini")
}
