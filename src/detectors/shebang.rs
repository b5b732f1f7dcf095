//! Shebang interpreter hints
//!
//! Matches on plain substrings of the first line, in a fixed order. A `#!`
//! line naming an interpreter we do not know falls through to the rest of
//! the cascade instead of stopping it.

use crate::context::DetectionContext;

/// Classify a snippet by its `#!` line
pub fn check_shebang(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let line = ctx.first_line;
    if !line.starts_with("#!") {
        return None;
    }

    if line.contains("/bash") || line.contains("/sh") {
        // Shell wrapper that re-execs itself under the Scala runner
        if ctx.second_line().is_some_and(|l| l.contains("exec scala")) {
            return Some("scala");
        }
        if line.contains("/fish") {
            return Some("fish");
        }
        if line.contains("/zsh") {
            return Some("zsh");
        }
        return Some("bash");
    }

    if line.contains("/awk") {
        return Some("awk");
    }
    if line.contains("/expect") {
        return Some("tcl");
    }
    if line.contains("/python") {
        return Some("python");
    }
    if line.contains("/ruby") {
        return Some("ruby");
    }
    if line.contains("/node") {
        return Some("javascript");
    }
    if line.contains("perl") {
        return Some("perl");
    }

    None
}
