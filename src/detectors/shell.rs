use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{Scorecard, Signal, Weight::*, pattern, pattern_set};
use crate::context::DetectionContext;

/// `#!/usr/bin/env bash` and friends, which the shebang classifier leaves alone
static ENV_SHEBANG: Lazy<Regex> =
    Lazy::new(|| pattern(r"^#!\s*\S*/env\s+(-\S+\s+)*(sh|bash|zsh|ksh|dash|fish)\b"));

/// PowerShell cmdlets, Dockerfile instructions, Makefile recipes and Vim script
static CONFUSABLE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\b(Get|Set|New|Remove|Write|Invoke|Import)-[A-Z]\w+",
        r"(?m)^\s*param\s*\(",
        r"(?m)^FROM\s+\S+[\s\S]*^(RUN|COPY|CMD|ENTRYPOINT|WORKDIR|ADD)\s",
        r"(?m)^[\w.%/$()-]+\s*:[^=\n]*\n\t\S",
        r"(?m)^\.PHONY\s*:",
        // `set -e` is bash; `set number` and `set ts=4` are Vim options
        r"(?m)^\s*set\s+(no)?[a-z]+([+^-]?=\S*)?\s*$",
        r"(?m)^\s*([nvxoic]?(nore)?map|autocmd|augroup)!?\s",
        r"(?m)^\s*let\s+[gsbwtv]:\w+",
        r"(?m)^\s*(function!|endfunction\b|endf\b)",
    ])
});

static ZSH_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*(setopt|unsetopt|autoload|zstyle|compdef|bindkey)\s",
        r"\$\{\(\w+\)",
    ])
});

static FISH_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*function\s+[\w-]+(\s+--?\w+.*)?\s*$[\s\S]*^\s*end\s*$",
        r"(?m)^\s*set\s+-[gxlU]+\s+\w+",
        r"\$argv\b",
    ])
});

static BASH_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "bash",
        &[
            Signal::new(r"\bif\s+\[\[?\s", Strong),
            Signal::new(r"(?m)^\s*fi\s*$", Strong),
            Signal::new(r"(?m)^\s*(done|esac)\s*$", Strong),
            Signal::new(r"\$\{?[A-Za-z_]\w*\}?", Weak),
            Signal::new(r"(?m)^\s*export\s+[A-Z_][A-Z0-9_]*=", Strong),
            Signal::new(r"(?m)^\s*[A-Za-z_]\w*=\S", Weak),
            Signal::new(r"(?m)^\s*(echo|cd|ls|mkdir|rm|cp|mv|chmod|chown|grep|sed|awk|curl|wget|cat|source|tar|git|sudo|docker|kubectl|make|ssh|touch|printf|exit|read)\s", Strong),
            Signal::new(r"\|\s*(grep|sed|awk|sort|uniq|head|tail|wc|xargs|tr|cut|tee)\b", Strong),
            Signal::new(r"\d?>>?\s*(/dev/null|&\d|\S+)|&&|\|\|", Weak),
            Signal::new(r"\$\(", Weak),
            Signal::new(r";\s*then\b|(?m)^\s*then\s*$", Strong),
            Signal::new(r"(?m)^\s*(function\s+)?[\w-]+\s*\(\)\s*\{", Strong),
            Signal::new(r"\bfor\s+\w+\s+in\b.*;\s*do\b|(?m)^\s*do\s*$", Weak),
            Signal::new(r"(?m)^\s*local\s+\w+=", Weak),
            Signal::new(r"(?m)^\s*(sudo\s+)?(apt|apt-get|yum|dnf|brew|npm|pip|pip3|cargo|yarn|pnpm|gem|go)\s+(install|add|update|upgrade|remove|run|build|test|init|get)\b", Decisive),
            Signal::new(r"(?m)^\s*\$\s+\w", Strong),
        ],
    )
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if let Some(caps) = ENV_SHEBANG.captures(ctx.first_line) {
        return Some(match &caps[2] {
            "zsh" => "zsh",
            "fish" => "fish",
            _ => "bash",
        });
    }

    let text = ctx.first_100_lines.as_str();
    if CONFUSABLE.is_match(text) {
        return None;
    }

    if ZSH_TELLS.is_match(text) {
        return Some("zsh");
    }
    if !ctx.has_curly_braces && FISH_TELLS.is_match(text) {
        return Some("fish");
    }

    BASH_SIGNALS.clears(text, 3).then_some("bash")
}
