//! Build, deployment and schema languages

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use crate::context::DetectionContext;
use crate::detectors::scoring::{Scorecard, Signal, Weight::*, count_matches, pattern, pattern_set};

static DOCKER_FROM: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?im)^FROM\s+[\w.\-/:$\{\}@]+(\s+AS\s+\w+)?\s*$"));

static DOCKER_INSTRUCTION: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?m)^(RUN|COPY|ADD|CMD|ENTRYPOINT|WORKDIR|ENV|EXPOSE|ARG|LABEL|USER|VOLUME|HEALTHCHECK|SHELL|ONBUILD|STOPSIGNAL)\s")
});

static MAKE_TARGET: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?m)^[\w.%/$()-]+(\s+[\w.%/$()-]+)*\s*::?[^=\n]*\n\t\S"));

static MAKE_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\.PHONY\s*:",
        r"(?m)^[A-Z_][A-Z0-9_]*\s*(:=|\?=|\+=)",
        r"\$\((CC|CXX|CFLAGS|LDFLAGS|MAKE|RM|shell|wildcard|patsubst)\b",
        r"\$[@<^]",
        r"(?m)^(ifeq|ifneq|ifdef|ifndef|endif|include)\b",
    ])
});

static NGINX_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "nginx",
        &[
            Signal::new(r"(?m)^\s*(server|http|events|upstream|stream)\s*(\w+\s*)?\{", Strong),
            Signal::new(r"(?m)^\s*location\s+(=|~\*?|\^~)?\s*\S+\s*\{", Decisive),
            Signal::new(r"(?m)^\s*(listen|server_name|root|index|proxy_pass|proxy_set_header|return|rewrite|try_files|access_log|error_log|worker_processes|worker_connections|ssl_certificate|include|gzip)\s+[^;\n]+;", Strong),
        ],
    )
});

static HCL_BLOCK: Lazy<Regex> = Lazy::new(|| {
    pattern(r#"(?m)^\s*(resource|data|variable|output|provider|module|terraform|locals)\s*("[^"]*"\s*){0,2}\{"#)
});

static HCL_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"\$\{[\w.\[\]]+\}",
        r"\b(var|local|module|data)\.\w+",
        r#"(?m)^\s*\w+\s*=\s*("|\[|\{|true|false|\d|var\.)"#,
    ])
});

static GRAPHQL_SIGNALS: Lazy<Scorecard> = Lazy::new(|| {
    Scorecard::compile(
        "graphql",
        &[
            Signal::new(r"(?m)^\s*(query|mutation|subscription)\s+\w*\s*(\([^)]*\))?\s*\{", Decisive),
            Signal::new(r"(?m)^\s*fragment\s+\w+\s+on\s+\w+", Decisive),
            Signal::new(r"(?m)^\s*(type|input|interface|enum|union|scalar|schema)\s+\w*\s*(implements\s+\w+\s*)?[{=]?", Weak),
            Signal::new(r"\w+\s*(\([^)]*\))?\s*:\s*\[?\w+!?\]?!", Strong),
            Signal::new(r"\$\w+\s*:\s*\[?\w+!?", Strong),
            Signal::new(r"\.\.\.\s*\w+", Weak),
            Signal::new(r"@(deprecated|skip|include|key|external)\b", Weak),
        ],
    )
});

static PROTOBUF_TELLS: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r#"(?m)^\s*syntax\s*=\s*"proto[23]"\s*;"#,
        r"(?m)^\s*message\s+\w+\s*\{",
        r"(?m)^\s*(repeated|optional|required)?\s*(string|int32|int64|uint32|uint64|bool|bytes|double|float|sint32|fixed64|\w+)\s+\w+\s*=\s*\d+\s*;",
        r"(?m)^\s*service\s+\w+\s*\{[\s\S]*\brpc\s+\w+",
        r"(?m)^\s*package\s+[\w.]+\s*;",
    ])
});

pub fn detect_docker(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    let instructions = count_matches(&DOCKER_INSTRUCTION, text);
    ((DOCKER_FROM.is_match(text) && instructions >= 1) || instructions >= 3).then_some("docker")
}

pub fn detect_makefile(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    let targets = count_matches(&MAKE_TARGET, text);
    let tells = MAKE_TELLS.matches(text).iter().count();
    (targets >= 2 || (targets >= 1 && tells >= 1) || tells >= 2).then_some("makefile")
}

pub fn detect_nginx(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if !ctx.has_curly_braces {
        return None;
    }
    NGINX_SIGNALS
        .clears(&ctx.first_100_lines, 4)
        .then_some("nginx")
}

pub fn detect_hcl(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();
    (HCL_BLOCK.is_match(text) && HCL_TELLS.is_match(text)).then_some("hcl")
}

pub fn detect_graphql(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    if !ctx.has_curly_braces || ctx.has_semicolon {
        return None;
    }
    GRAPHQL_SIGNALS
        .clears(&ctx.first_100_lines, 3)
        .then_some("graphql")
}

pub fn detect_protobuf(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let hits = PROTOBUF_TELLS.matches(&ctx.first_100_lines);
    (hits.matched(0) || hits.iter().count() >= 2).then_some("protobuf")
}
