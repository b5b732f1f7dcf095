//! Compiled, low-level and hardware languages

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use crate::context::DetectionContext;
use crate::detectors::scoring::{Scorecard, Signal, Weight::*, count_matches, pattern, pattern_set};

static SOLIDITY_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "solidity",
        &[
            Signal::new(r"(?m)^\s*pragma\s+solidity\b", Decisive),
            Signal::new(r"(?m)^\s*(abstract\s+)?(contract|library|interface)\s+\w+(\s+is\s+[\w, ]+)?\s*\{", Decisive),
            Signal::new(r"\bfunction\s+\w+\s*\([^)]*\)\s*(public|external|internal|private|view|pure|payable)", Strong),
            Signal::new(r"\bmapping\s*\(", Decisive),
            Signal::new(r"\bmsg\.(sender|value)\b", Strong),
            Signal::new(r"\b(uint256|uint8|bytes32|address\s+(public|payable))\b", Strong),
            Signal::new(r"\bemit\s+\w+\(", Strong),
        ],
    )
});

static OBJC_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "objectivec",
        &[
            Signal::new(r"(?m)^\s*#import\s*[<\x22]", Decisive),
            Signal::new(r"(?m)^\s*@(interface|implementation|protocol)\s+\w+", Decisive),
            Signal::new(r"(?m)^\s*@property\b", Strong),
            Signal::new(r"\[\w+\s+\w+(:[^\]]*)?\]", Weak),
            Signal::new(r"\b(NSString|NSLog|NSArray|NSDictionary|NSObject|UIView)\b", Strong),
            Signal::new(r#"@""#, Strong),
            Signal::new(r"(?m)^\s*[-+]\s*\(\w+\s*\**\)\s*\w+", Strong),
        ],
    )
});

static ZIG_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "zig",
        &[
            Signal::new(r#"@import\s*\(\s*"std"\s*\)"#, Decisive),
            Signal::new(r"\)\s*!\w+\s*\{", Decisive),
            Signal::new(r"\bstd\.(debug|mem|heap|fs)\.", Strong),
            Signal::new(r"\bcomptime\b", Strong),
            Signal::new(r"\b(const|var)\s+\w+\s*(:\s*\w+)?\s*=", Weak),
            Signal::new(r"\btry\s+\w", Weak),
            Signal::new(r"\.\{\s*\}|\.\{\s*\.\w", Strong),
        ],
    )
});

static NIM_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "nim",
        &[
            Signal::new(r"(?m)^\s*proc\s+\w+\*?\s*(\[[^\]]*\])?\([^)]*\)\s*(:\s*[\w\[\]]+)?\s*=", Decisive),
            Signal::new(r"(?m)^\s*echo\s", Weak),
            Signal::new(r"(?m)^\s*import\s+(strutils|sequtils|os|tables|strformat|math|times)\b", Strong),
            Signal::new(r"(?m)^\s*(var|let|const)\s+\w+\s*:\s*\w+", Weak),
            Signal::new(r"(?m)^\s*type\s*$|(?m)^\s*\w+\*?\s*=\s*(object|ref object|enum)\b", Strong),
            Signal::new(r"\bfor\s+\w+\s+in\s+\d+\s*\.\.", Weak),
        ],
    )
});

static D_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "d",
        &[
            Signal::new(r"(?m)^\s*import\s+std\.\w+", Decisive),
            Signal::new(r"\bwriteln?f?\s*\(", Strong),
            Signal::new(r"\bvoid\s+main\s*\(", Weak),
            Signal::new(r"\bauto\s+\w+\s*=", Weak),
            Signal::new(r"\b(immutable|shared|scope)\s+\w", Weak),
            Signal::new(r"\w!\(", Strong),
            Signal::new(r"(?m)^\s*module\s+[\w.]+\s*;", Strong),
        ],
    )
});

static FORTRAN_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "fortran",
        &[
            Signal::new(r"(?im)^\s*program\s+\w+\s*$", Decisive),
            Signal::new(r"(?im)^\s*end\s+(program|subroutine|function|module|do|if)\b", Decisive),
            Signal::new(r"(?im)^\s*implicit\s+none\b", Decisive),
            Signal::new(r"(?i)\b(integer|real|character|logical|double\s+precision)(\s*\([^)]*\))?\s*(,\s*\w+(\([^)]*\))?)*\s*::", Strong),
            Signal::new(r"(?im)^\s*(subroutine|function)\s+\w+\s*\(", Strong),
            Signal::new(r"(?i)\bprint\s*\*\s*,|\bwrite\s*\(\s*\*", Strong),
        ],
    )
});

static COBOL_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "cobol",
        &[
            Signal::new(r"(?i)\bIDENTIFICATION\s+DIVISION\b", Decisive),
            Signal::new(r"(?i)\bPROCEDURE\s+DIVISION\b", Decisive),
            Signal::new(r"(?i)\b(DATA|ENVIRONMENT)\s+DIVISION\b", Decisive),
            Signal::new(r"(?i)\bWORKING-STORAGE\s+SECTION\b", Decisive),
            Signal::new(r"(?i)\bPIC(TURE)?\s+[X9SVA]", Strong),
            Signal::new(r"(?i)\bSTOP\s+RUN\b", Strong),
            Signal::new(r"(?i)\bDISPLAY\s+['\x22]", Weak),
        ],
    )
});

/// Ada shares `begin`/`end` blocks with Pascal
static ADA_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?im)^\s*with\s+Ada\.",
        r"(?im)^\s*(procedure|function|package(\s+body)?)\s+[\w.]+.*\bis\s*$",
        r"\bPut_Line\s*\(",
    ])
});

static PASCAL_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "pascal",
        &[
            Signal::new(r"(?im)^\s*program\s+\w+\s*;", Decisive),
            Signal::new(r"(?im)^\s*begin\s*$", Strong),
            Signal::new(r"(?im)^\s*end\s*\.\s*$", Strong),
            Signal::new(r":=", Weak),
            Signal::new(r"(?i)\bwriteln\s*\(", Weak),
            Signal::new(r"(?im)^\s*(procedure|function)\s+\w+(\([^)]*\))?\s*(:\s*\w+)?\s*;", Strong),
            Signal::new(r"(?im)^\s*uses\s+[\w, ]+;", Strong),
            Signal::new(r"(?im)^\s*var\s*$", Strong),
        ],
    )
});

static ADA_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "ada",
        &[
            Signal::new(r"(?im)^\s*with\s+Ada\.[\w.]+\s*;", Decisive),
            Signal::new(r"(?im)^\s*use\s+Ada\.[\w.]+\s*;", Strong),
            Signal::new(r"(?im)^\s*(procedure|function|package(\s+body)?)\s+[\w.]+.*\bis\s*$", Strong),
            Signal::new(r"(?im)^\s*end\s+[\w.]+\s*;", Weak),
            Signal::new(r"\bPut_Line\s*\(", Strong),
            Signal::new(r":\s*(Integer|Natural|Positive|String|Boolean|Float)\b", Weak),
        ],
    )
});

static ASM_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?im)^\s*(section\s+\.(text|data|bss)|\.(text|data|globl|global|section|intel_syntax)\b|global\s+_?start|global\s+main)")
});

static ASM_INSTRUCTION: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?im)^\s*(\w+:\s*)?(mov[a-z]*|push[a-z]*|pop[a-z]*|jmp|j[a-z]{1,3}|call|ret|add|sub|xor|and|or|cmp|test|lea|inc|dec|int|syscall|nop|ldr|str|bl|bx|b\.\w+|addi|li|la|sw|lw)\s+[\w%$#\[\]]")
});

static ASM_REGISTER: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)%?\b([re]?[abcd]x|[re]?[sd]i|[re]?[sb]p|r\d{1,2}|[xw]\d{1,2}|[abcd][lh]|sp|lr|pc)\b|\$[atsv]\d\b")
});

static WGSL_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"@(vertex|fragment|compute)\b",
        r"\bvar<(uniform|storage|private|workgroup)",
        r"\bvec[234]<f32>",
        r"@(location|builtin|group|binding)\s*\(",
    ])
});

static HLSL_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r":\s*SV_\w+",
        r"\b(float[234](x[234])?|half[234])\b",
        r"\bcbuffer\s+\w+",
        r"\b(Texture2D|SamplerState|RWTexture2D|StructuredBuffer)\b",
        r"\bregister\s*\(\s*[tbsu]\d+\s*\)",
    ])
});

static GLSL_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*#version\s+\d+",
        r"\bgl_(Position|FragColor|FragCoord|VertexID|PointSize)\b",
        r"(?m)^\s*(uniform|varying|attribute|in|out)\s+(vec[234]|mat[234]|float|int|sampler2D|bool)\s+\w+",
        r"\b(vec[234]|mat[234])\s*\(",
        r"\btexture2?D?\s*\(\s*\w+\s*,",
    ])
});

static VERILOG_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "verilog",
        &[
            Signal::new(r"(?m)^\s*module\s+\w+\s*(#\s*\()?\s*\(", Strong),
            Signal::new(r"(?m)^\s*endmodule\b", Decisive),
            Signal::new(r"\balways\s*@\s*\(", Decisive),
            Signal::new(r"(?m)^\s*assign\s+\w+", Strong),
            Signal::new(r"\b(wire|reg|logic)\s*(\[\d+:\d+\])?\s*\w+", Strong),
            Signal::new(r"\b(posedge|negedge)\b", Strong),
            Signal::new(r"\b(input|output|inout)\s+(wire\s+|reg\s+)?(\[\d+:\d+\]\s*)?\w+", Weak),
        ],
    )
});

static VHDL_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "vhdl",
        &[
            Signal::new(r"(?im)^\s*library\s+ieee\s*;", Decisive),
            Signal::new(r"(?im)^\s*use\s+ieee\.", Strong),
            Signal::new(r"(?im)^\s*entity\s+\w+\s+is\b", Decisive),
            Signal::new(r"(?im)^\s*architecture\s+\w+\s+of\s+\w+\s+is\b", Decisive),
            Signal::new(r"(?i)\bstd_logic(_vector)?\b", Strong),
            Signal::new(r"\w+\s*<=\s*\w", Weak),
            Signal::new(r"(?i)\bport\s*\(", Weak),
        ],
    )
});

const BRAINFUCK_OPS: &[char] = &['+', '-', '<', '>', '[', ']', '.', ','];

pub fn detect_solidity(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    SOLIDITY_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("solidity")
}

pub fn detect_objectivec(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    OBJC_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("objectivec")
}

pub fn detect_zig(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    ZIG_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("zig")
}

pub fn detect_nim(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if ctx.has_curly_braces && ctx.has_semicolon {
        return None;
    }
    NIM_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("nim")
}

pub fn detect_d(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    D_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("d")
}

pub fn detect_fortran(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    FORTRAN_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("fortran")
}

pub fn detect_cobol(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    COBOL_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("cobol")
}

pub fn detect_pascal(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    if ADA_TELLS.is_match(text) {
        return None;
    }
    PASCAL_SIGNALS.clears(text, 3).then_some("pascal")
}

pub fn detect_ada(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    ADA_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("ada")
}

pub fn detect_assembly(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    if ASM_DIRECTIVE.is_match(text) {
        return Some("asm");
    }
    let instructions = count_matches(&ASM_INSTRUCTION, text);
    (instructions >= 3 && ASM_REGISTER.is_match(text) && !ctx.has_curly_braces).then_some("asm")
}

pub fn detect_shader(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    if WGSL_TELLS.is_match(text) && text.contains("fn ") {
        return Some("wgsl");
    }
    if HLSL_TELLS.matches(text).iter().count() >= 2 {
        return Some("hlsl");
    }
    let glsl = GLSL_TELLS.matches(text);
    (glsl.matched(0) || glsl.matched(1) || glsl.iter().count() >= 2).then_some("glsl")
}

pub fn detect_hdl(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    if VHDL_SIGNALS.clears(text, 4) {
        return Some("vhdl");
    }
    VERILOG_SIGNALS.clears(text, 4).then_some("verilog")
}

pub fn detect_brainfuck(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let mut ops = 0usize;
    let mut other = 0usize;
    for c in ctx.sample.chars().filter(|c| !c.is_whitespace()) {
        if BRAINFUCK_OPS.contains(&c) {
            ops += 1;
        } else {
            other += 1;
        }
    }
    let loops = ctx.sample.contains('[') && ctx.sample.contains(']');
    (ops >= 10 && loops && other * 10 <= ops).then_some("brainfuck")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(code: &str) -> DetectionContext<'_> {
        DetectionContext::new(code)
    }

    #[test]
    fn test_solidity_contract() {
        let code = "pragma solidity ^0.8.0;\n\ncontract Token {\n    mapping(address => uint256) balances;\n}";
        assert_eq!(detect_solidity(&ctx(code)), Some("solidity"));
    }

    #[test]
    fn test_objective_c_interface() {
        let code = "#import <Foundation/Foundation.h>\n\n@interface Person : NSObject\n@property NSString *name;\n@end";
        assert_eq!(detect_objectivec(&ctx(code)), Some("objectivec"));
    }

    #[test]
    fn test_zig_main() {
        let code = "const std = @import(\"std\");\n\npub fn main() !void {\n    std.debug.print(\"hi\\n\", .{});\n}";
        assert_eq!(detect_zig(&ctx(code)), Some("zig"));
    }

    #[test]
    fn test_nim_proc() {
        let code = "import strutils\n\nproc greet(name: string): string =\n  result = \"Hello \" & name\n\necho greet(\"nim\")";
        assert_eq!(detect_nim(&ctx(code)), Some("nim"));
    }

    #[test]
    fn test_d_program() {
        let code = "import std.stdio;\n\nvoid main() {\n    writeln(\"Hello\");\n}";
        assert_eq!(detect_d(&ctx(code)), Some("d"));
    }

    #[test]
    fn test_fortran_program() {
        let code = "program hello\n  implicit none\n  print *, 'Hello'\nend program hello";
        assert_eq!(detect_fortran(&ctx(code)), Some("fortran"));
    }

    #[test]
    fn test_cobol_divisions() {
        let code = "IDENTIFICATION DIVISION.\nPROGRAM-ID. HELLO.\nPROCEDURE DIVISION.\n    DISPLAY 'HELLO'.\n    STOP RUN.";
        assert_eq!(detect_cobol(&ctx(code)), Some("cobol"));
    }

    #[test]
    fn test_pascal_and_ada() {
        let pascal = "program Hello;\nbegin\n  writeln('Hello');\nend.";
        assert_eq!(detect_pascal(&ctx(pascal)), Some("pascal"));

        let ada = "with Ada.Text_IO; use Ada.Text_IO;\nprocedure Hello is\nbegin\n   Put_Line (\"Hello\");\nend Hello;";
        assert_eq!(detect_pascal(&ctx(ada)), None);
        assert_eq!(detect_ada(&ctx(ada)), Some("ada"));
    }

    #[test]
    fn test_assembly() {
        let code = "section .text\nglobal _start\n_start:\n    mov rax, 60\n    syscall";
        assert_eq!(detect_assembly(&ctx(code)), Some("asm"));

        let bare = "mov eax, 1\nmov ebx, 0\nint 0x80";
        assert_eq!(detect_assembly(&ctx(bare)), Some("asm"));
    }

    #[test]
    fn test_shader_dialects() {
        let glsl = "#version 330 core\nout vec4 color;\nvoid main() {\n  color = vec4(1.0);\n}";
        assert_eq!(detect_shader(&ctx(glsl)), Some("glsl"));

        let hlsl = "float4 main(float4 pos : SV_POSITION) : SV_TARGET {\n  return float4(1, 0, 0, 1);\n}";
        assert_eq!(detect_shader(&ctx(hlsl)), Some("hlsl"));

        let wgsl = "@fragment\nfn main() -> @location(0) vec4<f32> {\n  return vec4<f32>(1.0);\n}";
        assert_eq!(detect_shader(&ctx(wgsl)), Some("wgsl"));
    }

    #[test]
    fn test_hdl_dialects() {
        let verilog = "module counter(input clk, output reg [3:0] q);\n  always @(posedge clk) q <= q + 1;\nendmodule";
        assert_eq!(detect_hdl(&ctx(verilog)), Some("verilog"));

        let vhdl = "library ieee;\nuse ieee.std_logic_1164.all;\n\nentity blink is\n  port (clk : in std_logic);\nend blink;";
        assert_eq!(detect_hdl(&ctx(vhdl)), Some("vhdl"));
    }

    #[test]
    fn test_brainfuck() {
        let code = "++++++++[>++++[>++>+++<<-]>+<<-]>>.>---.";
        assert_eq!(detect_brainfuck(&ctx(code)), Some("brainfuck"));
        assert_eq!(detect_brainfuck(&ctx("a + b - c")), None);
    }
}
