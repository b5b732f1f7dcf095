//! Scripting and glue languages

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use crate::context::DetectionContext;
use crate::detectors::scoring::{Scorecard, Signal, Weight::*, pattern, pattern_set};

/// Lua tells that rule out MATLAB and Julia, which also close blocks with `end`
static LUA_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*local\s+(function\s+)?\w+",
        r"\bthen\b",
        r"(?m)^\s*--",
    ])
});

static MATLAB_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "matlab",
        &[
            Signal::new(r"(?m)^\s*%", Weak),
            Signal::new(r"(?m)^\s*function\s+(\[[^\]]*\]|\w+)\s*=\s*\w+\s*\(", Decisive),
            Signal::new(r"\b(disp|fprintf|plot|zeros|ones|linspace|figure|xlabel|ylabel|numel|size)\s*\(", Strong),
            Signal::new(r"(?m)^\s*end\s*;?\s*$", Weak),
            Signal::new(r"\.\*|\./|\.\^", Weak),
            Signal::new(r"\w+\s*=\s*\[[\d\s,;.\-]+\]\s*;", Strong),
            Signal::new(r"(?m)^\s*for\s+\w+\s*=\s*\d+\s*:\s*\w+", Strong),
        ],
    )
});

static LUA_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "lua",
        &[
            Signal::new(r"(?m)^\s*local\s+\w+(\s*,\s*\w+)*\s*=", Strong),
            Signal::new(r"(?m)^\s*local\s+function\s+\w+\s*\(", Strong),
            Signal::new(r"(?m)^\s*(local\s+)?function\s+[\w.:]+\s*\(", Weak),
            Signal::new(r"(?m)\bthen\s*$", Strong),
            Signal::new(r"(?m)^\s*end\s*$", Weak),
            Signal::new(r"(?m)^\s*--", Weak),
            Signal::new(r"~=", Weak),
            Signal::new(r"[\w'\x22)\]]\s*\.\.\s*['\x22\w(]", Weak),
            Signal::new(r"\bnil\b", Weak),
            Signal::new(r"\brequire\s*\(?\s*['\x22]", Weak),
            Signal::new(r"\bi?pairs\s*\(", Strong),
        ],
    )
});

static PERL_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "perl",
        &[
            Signal::new(r"(?m)^\s*use\s+(strict|warnings|utf8)\s*;", Decisive),
            Signal::new(r"\bmy\s+[$@%]\w+", Strong),
            Signal::new(r"\$_\b|@_\b", Weak),
            Signal::new(r"(?m)^\s*sub\s+\w+\s*\{", Strong),
            Signal::new(r"=~\s*[sm]?/", Strong),
            Signal::new(r"->\{\w+\}", Weak),
            Signal::new(r"(?m)^__(END|DATA)__\s*$", Decisive),
            Signal::new(r"\bforeach\s+my\s+\$", Strong),
            Signal::new(r"\bdie\s+['\x22]|\bor\s+die\b", Strong),
        ],
    )
});

static R_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "r",
        &[
            Signal::new(r"[\w.]+\s*<-\s*", Strong),
            Signal::new(r"\b(library|require)\s*\(\s*\w+\s*\)", Decisive),
            Signal::new(r"\bfunction\s*\([^)]*\)\s*\{?", Weak),
            Signal::new(r"\bc\s*\(", Weak),
            Signal::new(r"\bdata\.frame\s*\(", Decisive),
            Signal::new(r"%>%|\|>", Strong),
            Signal::new(r"\b(ggplot|aes|summary|nrow|ncol|rnorm|paste0?|sapply|lapply)\s*\(", Strong),
            Signal::new(r"\b(TRUE|FALSE|NA|NULL)\b", Weak),
            Signal::new(r"\w+\$\w+", Weak),
        ],
    )
});

static JULIA_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "julia",
        &[
            Signal::new(r"(?m)^\s*function\s+\w+(\{[^\}]*\})?\([^)]*\)\s*(::\s*\w+)?\s*$", Strong),
            Signal::new(r"(?m)^\s*end\s*$", Weak),
            Signal::new(r"\bprintln\s*\(", Weak),
            Signal::new(r"(?m)^\s*using\s+[A-Z]\w*", Strong),
            Signal::new(r"::\s*(Int|Float|String|Vector|Array|Bool|Any)\w*", Strong),
            Signal::new(r"@(time|show|assert|inbounds|everywhere)\b", Strong),
            Signal::new(r"(?m)^\s*(mutable\s+)?struct\s+\w+\s*$", Strong),
            Signal::new(r"\.\s*[+*/-]=|\w\.\(", Weak),
        ],
    )
});

static POWERSHELL_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "powershell",
        &[
            Signal::new(r"\b(Get|Set|New|Remove|Write|Invoke|Import|Export|Start|Stop|Test|Add|Out|Select|Where|ForEach)-[A-Z]\w+", Decisive),
            Signal::new(r"\$\w+\s*=", Weak),
            Signal::new(r"(?im)^\s*param\s*\(", Strong),
            Signal::new(r"\s-(eq|ne|gt|lt|ge|le|like|match|and|or|not)\s", Strong),
            Signal::new(r"\[(string|int|bool|switch|array|hashtable)\]\s*\$", Strong),
            Signal::new(r"\$(true|false|null|_|PSScriptRoot)\b", Strong),
            Signal::new(r"@\{", Weak),
        ],
    )
});

static BATCH_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "batch",
        &[
            Signal::new(r"(?im)^\s*@echo\s+off\b", Decisive),
            Signal::new(r"(?im)^\s*(set|echo|goto|call|if|for|pause|cls)\s", Weak),
            Signal::new(r"%\w+%", Strong),
            Signal::new(r"(?m)^:\w+\s*$", Weak),
            Signal::new(r"(?im)^\s*(rem\s|::)", Strong),
            Signal::new(r"%~\w+", Decisive),
            Signal::new(r"(?i)\bexit\s+/b\b", Strong),
            Signal::new(r"(?i)\bsetlocal\b", Strong),
        ],
    )
});

/// `#!/usr/bin/tclsh`, `#!/usr/bin/env wish`
static TCL_SHEBANG: Lazy<Regex> = Lazy::new(|| pattern(r"^#!\s*\S*[/\s](tclsh|wish)[\d.]*\b"));

static TCL_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "tcl",
        &[
            Signal::new(r"(?m)^\s*proc\s+\w+\s+\{", Decisive),
            Signal::new(r"(?m)^\s*set\s+\w+\s+\S", Strong),
            Signal::new(r"(?m)^\s*puts\s", Weak),
            Signal::new(r"\[(expr|llength|lindex|string|list|incr|format)\s", Strong),
            Signal::new(r"\bexpr\s*\{", Strong),
            Signal::new(r"(?m)^\s*foreach\s+\w+\s+", Weak),
            Signal::new(r"(?m)^\s*package\s+require\b", Decisive),
        ],
    )
});

static AWK_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "awk",
        &[
            Signal::new(r"(?m)^\s*BEGIN\s*\{", Decisive),
            Signal::new(r"(?m)^\s*END\s*\{", Strong),
            Signal::new(r"\$(\d+|NF)\b", Weak),
            Signal::new(r"\b(NR|NF|FS|OFS|RS)\b", Strong),
            Signal::new(r"\bprint\s+\$\d", Strong),
            Signal::new(r"(?m)^\s*/[^/\n]+/\s*\{", Weak),
        ],
    )
});

static VIM_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "vim",
        &[
            Signal::new(r#"(?m)^\s*"\s"#, Weak),
            Signal::new(r"(?m)^\s*(set|let|nnoremap|noremap|inoremap|vnoremap|nmap|imap|map|autocmd|augroup|syntax|filetype|colorscheme|command!?)\s", Strong),
            Signal::new(r"\blet\s+[gbswtl]:\w+", Decisive),
            Signal::new(r"(?i)<leader>", Decisive),
            Signal::new(r"(?m)^\s*endfunc(tion)?\b", Decisive),
            Signal::new(r"\bcall\s+\w+[#\w]*\(", Weak),
            Signal::new(r"<(CR|Esc|C-\w)>", Strong),
        ],
    )
});

static GROOVY_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "groovy",
        &[
            Signal::new(r"\bdef\s+\w+\s*=", Strong),
            Signal::new(r#"(?m)^\s*println\s+["'$]"#, Strong),
            Signal::new(r"\.each(WithIndex)?\s*\{", Strong),
            Signal::new(r"\{\s*\w+(\s*,\s*\w+)*\s*->", Strong),
            Signal::new(r"(?m)^\s*(apply\s+plugin:|task\s+\w+|dependencies\s*\{|repositories\s*\{|plugins\s*\{)", Decisive),
            Signal::new(r#"(?m)^\s*(implementation|testImplementation|api|compile)\s+['"]"#, Decisive),
            Signal::new(r"\$\{\w+", Weak),
            Signal::new(r"\bit\.\w+", Weak),
        ],
    )
});

static COFFEESCRIPT_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "coffeescript",
        &[
            Signal::new(r"(?m)^\s*[\w.@]+\s*[=:]\s*(\([^)]*\))?\s*[-=]>", Decisive),
            Signal::new(r"@\w+", Weak),
            Signal::new(r"\bunless\b", Weak),
            Signal::new(r"#\{", Weak),
            Signal::new(r"(?m)^\s*class\s+\w+(\s+extends\s+\w+)?\s*$", Strong),
            Signal::new(r"\b(console\.log|alert)\s+['\x22@\w]", Strong),
            Signal::new(r"\bfor\s+\w+\s+(in|of)\s+\w+", Weak),
            Signal::new(r"(?m)^\s*#\s", Weak),
        ],
    )
});

pub fn detect_matlab(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    if LUA_TELLS.is_match(text) || ctx.has_curly_braces {
        return None;
    }
    MATLAB_SIGNALS.clears(text, 3).then_some("matlab")
}

pub fn detect_lua(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    LUA_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("lua")
}

pub fn detect_perl(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    PERL_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("perl")
}

pub fn detect_r(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    R_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("r")
}

pub fn detect_julia(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    if LUA_TELLS.is_match(text) {
        return None;
    }
    JULIA_SIGNALS.clears(text, 3).then_some("julia")
}

pub fn detect_powershell(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    POWERSHELL_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("powershell")
}

pub fn detect_batch(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    BATCH_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("batch")
}

pub fn detect_tcl(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if TCL_SHEBANG.is_match(ctx.first_line) {
        return Some("tcl");
    }
    TCL_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("tcl")
}

pub fn detect_awk(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    AWK_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("awk")
}

pub fn detect_vim(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    VIM_SIGNALS.clears(&ctx.first_100_lines, 3).then_some("vim")
}

pub fn detect_groovy(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    GROOVY_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("groovy")
}

pub fn detect_coffeescript(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if ctx.has_semicolon {
        return None;
    }
    COFFEESCRIPT_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("coffeescript")
}
