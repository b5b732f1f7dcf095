//! Sample context shared by every detector
//!
//! The context is built once per classification call. It trims the input,
//! caps it to a character-bounded sample, splits the sample into lines and
//! precomputes a handful of cheap feature flags. Detectors only ever see
//! this view of the input.
//!
//! Feature flags are computed against the whole `sample`, while most
//! detectors run their pattern checks against `first_100_lines` to bound
//! regex cost.

/// Maximum number of characters (not bytes) a detector may look at
pub const DEFAULT_SAMPLE_CHAR_LIMIT: usize = 50_000;

const FIRST_20: usize = 20;
const FIRST_100: usize = 100;

/// Read-only view of a snippet under classification
#[derive(Debug, Clone)]
pub struct DetectionContext<'a> {
    /// Trimmed input, unbounded length
    pub code: &'a str,
    /// `code` capped to the sample limit
    pub sample: &'a str,
    /// `sample` split on `'\n'`; never empty
    pub lines: Vec<&'a str>,
    pub first_line: &'a str,
    pub first_20_lines: String,
    pub first_100_lines: String,
    pub has_curly_braces: bool,
    pub has_arrow: bool,
    pub has_double_colon: bool,
    pub has_import: bool,
    pub has_function: bool,
    pub has_const: bool,
    pub has_let: bool,
    pub has_class: bool,
    pub has_semicolon: bool,
}

impl<'a> DetectionContext<'a> {
    /// Build a context with the default 50,000 character sample cap
    #[must_use]
    pub fn new(code: &'a str) -> Self {
        Self::with_sample_limit(code, DEFAULT_SAMPLE_CHAR_LIMIT)
    }

    /// Build a context capping the sample to `limit` characters
    #[must_use]
    pub fn with_sample_limit(code: &'a str, limit: usize) -> Self {
        let code = code.trim();
        let sample = char_prefix(code, limit);
        let lines: Vec<&str> = sample.split('\n').collect();
        let first_line = lines.first().copied().unwrap_or("");
        let first_20_lines = join_window(&lines, FIRST_20);
        let first_100_lines = join_window(&lines, FIRST_100);

        Self {
            code,
            sample,
            first_line,
            first_20_lines,
            first_100_lines,
            has_curly_braces: sample.contains('{'),
            has_arrow: sample.contains("->"),
            has_double_colon: sample.contains("::"),
            has_import: sample.contains("import"),
            has_function: sample.contains("function"),
            has_const: sample.contains("const"),
            has_let: sample.contains("let"),
            has_class: sample.contains("class"),
            has_semicolon: sample.contains(';'),
            lines,
        }
    }

    /// Second line of the sample, if any
    #[must_use]
    pub fn second_line(&self) -> Option<&'a str> {
        self.lines.get(1).copied()
    }

    /// True when `sample` was cut short of `code`
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.sample.len() < self.code.len()
    }
}

/// Longest prefix of `s` holding at most `max_chars` characters.
///
/// Counts Unicode scalar values, so the cut always lands on a char boundary.
#[must_use]
pub fn char_prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

fn join_window(lines: &[&str], count: usize) -> String {
    lines[..lines.len().min(count)].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_one_empty_line() {
        let ctx = DetectionContext::new("");
        assert_eq!(ctx.lines, vec![""]);
        assert_eq!(ctx.first_line, "");
        assert_eq!(ctx.first_20_lines, "");
        assert!(!ctx.has_curly_braces);
    }

    #[test]
    fn test_input_is_trimmed() {
        let ctx = DetectionContext::new("  \n\tfn main() {}\n\n  ");
        assert_eq!(ctx.code, "fn main() {}");
        assert_eq!(ctx.first_line, "fn main() {}");
        assert_eq!(ctx.lines.len(), 1);
    }

    #[test]
    fn test_sample_is_char_capped() {
        let code = "é".repeat(60_000);
        let ctx = DetectionContext::new(&code);
        assert_eq!(ctx.sample.chars().count(), DEFAULT_SAMPLE_CHAR_LIMIT);
        assert_eq!(ctx.code.chars().count(), 60_000);
        assert!(ctx.is_truncated());
    }

    #[test]
    fn test_short_input_sample_equals_code() {
        let ctx = DetectionContext::new("let x = 1;");
        assert_eq!(ctx.sample, ctx.code);
        assert!(!ctx.is_truncated());
    }

    #[test]
    fn test_windows_do_not_overflow() {
        let ctx = DetectionContext::new("a\nb\nc");
        assert_eq!(ctx.first_20_lines, "a\nb\nc");
        assert_eq!(ctx.first_100_lines, "a\nb\nc");
        assert_eq!(ctx.second_line(), Some("b"));
    }

    #[test]
    fn test_windows_are_bounded() {
        let code: Vec<String> = (0..150).map(|i| format!("line{i}")).collect();
        let code = code.join("\n");
        let ctx = DetectionContext::new(&code);
        assert_eq!(ctx.lines.len(), 150);
        assert_eq!(ctx.first_20_lines.lines().count(), 20);
        assert_eq!(ctx.first_100_lines.lines().count(), 100);
        assert!(ctx.first_100_lines.ends_with("line99"));
    }

    #[test]
    fn test_lines_come_from_sample_only() {
        let mut code = "x".repeat(DEFAULT_SAMPLE_CHAR_LIMIT);
        code.push_str("\nhidden line");
        let ctx = DetectionContext::new(&code);
        assert_eq!(ctx.lines.len(), 1);
        assert!(!ctx.first_100_lines.contains("hidden"));
    }

    #[test]
    fn test_flags_use_whole_sample() {
        let mut lines: Vec<String> = (0..120).map(|_| "plain".to_string()).collect();
        lines.push("a::b -> { import function const let class ;".to_string());
        let code = lines.join("\n");
        let ctx = DetectionContext::new(&code);
        assert!(!ctx.first_100_lines.contains("::"));
        assert!(ctx.has_double_colon);
        assert!(ctx.has_arrow);
        assert!(ctx.has_curly_braces);
        assert!(ctx.has_import);
        assert!(ctx.has_function);
        assert!(ctx.has_const);
        assert!(ctx.has_let);
        assert!(ctx.has_class);
        assert!(ctx.has_semicolon);
    }

    #[test]
    fn test_char_prefix_boundaries() {
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("abc", 0), "");
    }
}
