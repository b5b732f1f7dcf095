use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{Scorecard, Signal, Weight::*, pattern, pattern_set};
use crate::context::DetectionContext;

static USING_SYSTEM: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?m)^\s*using\s+(static\s+)?System(\.[\w.]+)?\s*;"));

static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"System\.out\.",
        r"(?m)^\s*import\s+[\w.]+(\.\*)?\s*;",
        r"(?m)^\s*package\s+[\w.]+\s*;",
        r"(?m)^\s*#include\b",
        r"\bfun\s+\w+\s*\(",
        r"\bfunc\s+\w+\s*\(",
        r"<\?php",
    ])
});

static CSHARP_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "csharp",
        &[
            Signal::new(r"\{\s*get;\s*(private\s+|protected\s+|init;\s*)?(set;)?\s*\}", Decisive),
            Signal::new(r"\bConsole\.(Write|WriteLine|ReadLine|ReadKey)\s*\(", Decisive),
            Signal::new(r"\bstatic\s+(async\s+)?(void|int|Task)\s+Main\s*\(", Decisive),
            Signal::new(r"(?m)^\s*namespace\s+\w+(\.\w+)+\s*[{;]?\s*$", Strong),
            Signal::new(r"(?m)^\s*\[(HttpGet|HttpPost|HttpPut|HttpDelete|Route|ApiController|Serializable|Test|TestMethod|Fact|Theory|Required|JsonProperty)\b[^\]]*\]", Strong),
            Signal::new(r"\basync\s+Task(<[^>]+>)?\s+\w+\s*\(", Strong),
            Signal::new(r"\bforeach\s*\(\s*var\s+\w+\s+in\b", Strong),
            Signal::new(r"\b(public|private|protected|internal)\s+(static\s+|override\s+|virtual\s+|async\s+)*(void|string|int|bool|Task|IActionResult|IEnumerable<[^>]+>)\s+[A-Z]\w*\s*\(", Strong),
            Signal::new(r"\bstring\[\]\s+\w+", Weak),
            Signal::new(r"\bvar\s+\w+\s*=\s*new\b", Weak),
            Signal::new(r"\.(Where|Select|FirstOrDefault|ToList|Any)\s*\(\s*\w+\s*=>", Strong),
            Signal::new(r"\binternal\s+(sealed\s+|static\s+)?class\b", Strong),
            Signal::new(r"(?m)^\s*using\s+[A-Z]\w*(\.[A-Z]\w*)*\s*;", Strong),
            Signal::new(r"\bclass\s+\w+\s*:\s*[A-Z]\w*", Strong),
            Signal::new(r"\$@?\x22[^\x22\n]*\{[^}\n]+\}", Weak),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    if CONFUSABLE.is_match(text) {
        return None;
    }

    if USING_SYSTEM.is_match(text) {
        return Some("csharp");
    }

    CSHARP_SIGNALS.clears(text, 3).then_some("csharp")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csharp(code: &str) -> Option<&'static str> {
        detect(&DetectionContext::new(code))
    }

    #[test]
    fn test_using_system() {
        let code = "using System;\n\nclass Program {\n    static void Main() {}\n}";
        assert_eq!(csharp(code), Some("csharp"));
    }

    #[test]
    fn test_properties() {
        let code = "public class User\n{\n    public string Name { get; set; }\n}";
        assert_eq!(csharp(code), Some("csharp"));
    }

    #[test]
    fn test_console() {
        assert_eq!(csharp("Console.WriteLine(\"Hello\");"), Some("csharp"));
    }

    #[test]
    fn test_java_is_excluded() {
        let code = "import java.util.List;\n\npublic class Main {\n  public static void main(String[] args) {\n    System.out.println(\"x\");\n  }\n}";
        assert_eq!(csharp(code), None);
    }

    #[test]
    fn test_cpp_namespace_is_not_csharp() {
        let code = "#include <iostream>\nnamespace app {\nint run() { return 0; }\n}";
        assert_eq!(csharp(code), None);
    }

    #[test]
    fn test_unity_script() {
        let code = "using UnityEngine;\npublic class Foo : MonoBehaviour { void Start() { } }";
        assert_eq!(csharp(code), Some("csharp"));
    }

    #[test]
    fn test_swift_subclass_is_not_csharp() {
        assert_eq!(csharp("class Foo: Bar {\n    var x = 1\n}"), None);
    }
}
