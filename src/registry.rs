//! Static detector table
//!
//! Every detector is registered once with a name and a dispatch priority.
//! The table is built on first use, stably sorted by ascending priority and
//! never mutated afterwards. The core tier order is load-bearing: detectors
//! rely on exclusion heuristics rather than full grammars, so reordering them
//! changes the verdict for ambiguous snippets.

use once_cell::sync::Lazy;

use crate::context::DetectionContext;
use crate::detectors::extended::{data, functional, infra, markup, scripting, systems};
use crate::detectors::{
    Detector, cpp, csharp, css, dart, go, html, java, javascript, kotlin, markdown, php, python,
    ruby, rust, scala, shebang, shell, sql, swift,
};

/// Which family a detector belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectorTier {
    /// The documented cascade, priorities 1 to 19
    Core,
    /// Long-tail languages, consulted after the core tier
    Extended,
}

/// One registered detector
pub struct DetectorEntry {
    pub name: &'static str,
    pub priority: u16,
    pub tier: DetectorTier,
    detector: Box<dyn Detector>,
}

impl DetectorEntry {
    pub fn new(
        name: &'static str,
        priority: u16,
        tier: DetectorTier,
        detector: impl Detector + 'static,
    ) -> Self {
        Self {
            name,
            priority,
            tier,
            detector: Box::new(detector),
        }
    }

    pub fn detector(&self) -> &dyn Detector {
        self.detector.as_ref()
    }
}

impl std::fmt::Debug for DetectorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorEntry")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}

/// First priority handed to the extended tier
pub const EXTENDED_PRIORITY_START: u16 = 20;

type DetectFn = fn(&DetectionContext<'_>) -> Option<&'static str>;

static REGISTRY: Lazy<Vec<DetectorEntry>> = Lazy::new(build_registry);

fn build_registry() -> Vec<DetectorEntry> {
    use DetectorTier::*;

    let mut entries = vec![
        DetectorEntry::new("shebang", 1, Core, shebang::check_shebang),
        DetectorEntry::new("php", 2, Core, php::detect),
        DetectorEntry::new("dart", 3, Core, dart::detect),
        DetectorEntry::new("csharp", 4, Core, csharp::detect),
        DetectorEntry::new("html", 5, Core, html::detect),
        DetectorEntry::new("python", 6, Core, python::detect),
        DetectorEntry::new("ruby", 7, Core, ruby::detect),
        DetectorEntry::new("css", 8, Core, css::detect),
        DetectorEntry::new("rust", 9, Core, rust::detect),
        DetectorEntry::new("sql", 10, Core, sql::detect),
        DetectorEntry::new("java", 11, Core, java::detect),
        DetectorEntry::new("scala", 12, Core, scala::detect),
        DetectorEntry::new("cpp", 13, Core, cpp::detect),
        DetectorEntry::new("kotlin", 14, Core, kotlin::detect),
        DetectorEntry::new("go", 15, Core, go::detect),
        DetectorEntry::new("swift", 16, Core, swift::detect),
        DetectorEntry::new("javascript", 17, Core, javascript::detect),
        DetectorEntry::new("shell", 18, Core, shell::detect),
        DetectorEntry::new("markdown", 19, Core, markdown::detect),
    ];

    let extended: [(&'static str, DetectFn); 45] = [
        ("json", data::detect_json),
        ("yaml", data::detect_yaml),
        ("toml", data::detect_toml),
        ("xml", markup::detect_xml),
        ("docker", infra::detect_docker),
        ("makefile", infra::detect_makefile),
        ("nginx", infra::detect_nginx),
        ("hcl", infra::detect_hcl),
        ("graphql", infra::detect_graphql),
        ("protobuf", infra::detect_protobuf),
        ("solidity", systems::detect_solidity),
        ("objectivec", systems::detect_objectivec),
        ("haskell", functional::detect_haskell),
        ("elixir", functional::detect_elixir),
        ("erlang", functional::detect_erlang),
        ("lisp", functional::detect_lisp),
        ("ml", functional::detect_ml),
        ("elm", functional::detect_elm),
        ("matlab", scripting::detect_matlab),
        ("lua", scripting::detect_lua),
        ("perl", scripting::detect_perl),
        ("r", scripting::detect_r),
        ("julia", scripting::detect_julia),
        ("powershell", scripting::detect_powershell),
        ("batch", scripting::detect_batch),
        ("tcl", scripting::detect_tcl),
        ("awk", scripting::detect_awk),
        ("vim", scripting::detect_vim),
        ("zig", systems::detect_zig),
        ("nim", systems::detect_nim),
        ("d", systems::detect_d),
        ("fortran", systems::detect_fortran),
        ("cobol", systems::detect_cobol),
        ("pascal", systems::detect_pascal),
        ("ada", systems::detect_ada),
        ("assembly", systems::detect_assembly),
        ("shader", systems::detect_shader),
        ("hdl", systems::detect_hdl),
        ("latex", markup::detect_latex),
        ("diff", markup::detect_diff),
        ("groovy", scripting::detect_groovy),
        ("coffeescript", scripting::detect_coffeescript),
        ("prolog", functional::detect_prolog),
        ("brainfuck", systems::detect_brainfuck),
        ("ini", data::detect_ini),
    ];

    entries.extend(extended.into_iter().zip(EXTENDED_PRIORITY_START..).map(
        |((name, detect), priority)| DetectorEntry::new(name, priority, Extended, detect),
    ));

    // Stable: equal priorities keep registration order
    entries.sort_by_key(|entry| entry.priority);
    entries
}

/// The registered detectors in dispatch order
pub fn entries() -> &'static [DetectorEntry] {
    &REGISTRY
}

/// Look up a detector by name
pub fn find(name: &str) -> Option<&'static DetectorEntry> {
    REGISTRY.iter().find(|entry| entry.name == name)
}

/// Every label any registered detector can return
pub const KNOWN_LANGUAGES: &[&str] = &[
    // core
    "bash", "zsh", "fish", "scala", "awk", "tcl", "python", "ruby", "javascript", "perl", "php",
    "dart", "csharp", "html", "css", "scss", "less", "rust", "sql", "plsql", "tsql", "java", "cpp",
    "c", "kotlin", "go", "swift", "typescript", "tsx", "jsx", "vue", "svelte", "astro", "markdown",
    // extended
    "json", "yaml", "toml", "xml", "svg", "docker", "makefile", "nginx", "hcl", "graphql",
    "protobuf", "solidity", "objectivec", "haskell", "elixir", "erlang", "clojure", "racket",
    "scheme", "lisp", "fsharp", "ocaml", "elm", "matlab", "lua", "r", "julia", "powershell",
    "batch", "vim", "zig", "nim", "d", "fortran", "cobol", "pascal", "ada", "asm", "glsl", "hlsl",
    "wgsl", "verilog", "vhdl", "latex", "diff", "groovy", "coffeescript", "prolog", "brainfuck",
    "ini",
];

/// True if `label` is part of the detection vocabulary
pub fn is_known_language(label: &str) -> bool {
    KNOWN_LANGUAGES.contains(&label)
}
