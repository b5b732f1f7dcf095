use once_cell::sync::Lazy;
use regex::RegexSet;

use super::scoring::{Scorecard, Signal, Weight::*, pattern_set};
use crate::context::DetectionContext;

/// Zig and WGSL both declare functions with `fn`
static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"@import\s*\(",
        r"\)\s*!\w+\s*\{",
        r"@(vertex|fragment|compute)\b",
        r"\bvar<(uniform|storage|private|workgroup)",
        r"(?m)^\s*#include\b",
        // Java / C# / TypeScript access modifiers
        r"\b(public|private|protected)\s+\w",
        r"(?m)^\s*import\s+[\w.]+(\.\*)?\s*;",
    ])
});

static RUST_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "rust",
        &[
            Signal::new(r"\bfn\s+\w+\s*(<[^>]*>)?\s*\(", Strong),
            Signal::new(r"\bfn\s+main\s*\(\s*\)", Weak),
            Signal::new(r"\blet\s+mut\s+\w+", Strong),
            Signal::new(r"(?m)^\s*#!?\[\w+", Strong),
            Signal::new(r"\b(println|print|eprintln|format|vec|panic|assert|assert_eq|write|writeln|macro_rules|todo|unreachable)!\s*[(\[{]", Strong),
            Signal::new(r"\bpub(\(crate\))?\s+(fn|struct|enum|trait|mod|use|const|static|type)\b", Strong),
            Signal::new(r"(?m)^\s*use\s+(std|crate|super|self|core|alloc)::", Strong),
            Signal::new(r"(?m)^\s*impl\b.*\{", Strong),
            Signal::new(r"&'\w+\b", Weak),
            Signal::new(r"\b(Option|Result|Vec|Box|Rc|Arc|HashMap)<", Weak),
            Signal::new(r"\bmatch\s+[^{\s][^{]*\{", Weak),
            Signal::new(r"&mut\s", Weak),
            Signal::new(r"\b[A-Z]\w*::new\(", Weak),
            Signal::new(r"\.(unwrap|expect|clone|iter|collect)\(", Weak),
            Signal::new(r"\b(Some|Ok|Err)\(", Weak),
            Signal::new(r"(?m)^\s*(pub\s+)?(struct|enum|trait)\s+\w+", Weak),
            Signal::new(r"\bunsafe\s*\{", Strong),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    if CONFUSABLE.is_match(text) {
        return None;
    }

    RUST_SIGNALS.clears(text, 3).then_some("rust")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rust(code: &str) -> Option<&'static str> {
        detect(&DetectionContext::new(code))
    }

    #[test]
    fn test_bare_main() {
        assert_eq!(rust("fn main() {}"), Some("rust"));
    }

    #[test]
    fn test_struct_with_derive() {
        let code = "#[derive(Debug, Default)]\npub struct App {\n    counter: u8,\n}";
        assert_eq!(rust(code), Some("rust"));
    }

    #[test]
    fn test_impl_block() {
        let code = "impl Config {\n    pub fn new() -> Self {\n        Self::default()\n    }\n}";
        assert_eq!(rust(code), Some("rust"));
    }

    #[test]
    fn test_zig_is_excluded() {
        let code = "const std = @import(\"std\");\npub fn main() !void {\n    std.debug.print(\"hi\", .{});\n}";
        assert_eq!(rust(code), None);
    }

    #[test]
    fn test_wgsl_is_excluded() {
        let code = "@fragment\nfn main() -> @location(0) vec4<f32> {\n  return vec4<f32>(1.0);\n}";
        assert_eq!(rust(code), None);
    }
}
