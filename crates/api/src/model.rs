//! Source-set model shared between the pipeline and its build host.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Trailing path segment that marks a source directory as a global variable
/// library of a pipeline shared library.
pub const GLOBAL_VARS_SEGMENT: &str = "vars";

/// Maps a scripting-language extension to the extension of the stubs the
/// compiler derives from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMapping {
    pub source_ext: &'static str,
    pub target_ext: &'static str,
}

/// The one mapping the pipeline recognizes: Groovy sources become Java stubs.
pub const STUB_MAPPINGS: &[SuffixMapping] = &[SuffixMapping {
    source_ext: "groovy",
    target_ext: "java",
}];

impl SuffixMapping {
    /// Returns the mapping for `path`, or `None` when the file is not a
    /// recognized stub source.
    pub fn lookup(path: &Path) -> Option<&'static SuffixMapping> {
        let ext = path.extension()?.to_str()?;
        STUB_MAPPINGS.iter().find(|m| m.source_ext == ext)
    }
}

/// How a source set is fed to the stub compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceSetKind {
    /// Sources are handed to the compiler as-is.
    Plain,
    /// Sources are rewritten into wrapper classes before compilation.
    GlobalVarLibrary,
}

/// A root directory of script sources plus the filters and encoding metadata
/// the build host declared for it. Immutable for the duration of one run.
///
/// The kind is derived from the root path exactly once, here at construction;
/// downstream stages branch on the tag instead of re-inspecting the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "SourceSetSpec")]
pub struct SourceSet {
    pub root: PathBuf,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub line_ending: Option<String>,
    pub encoding: Option<String>,
    pub kind: SourceSetKind,
}

impl SourceSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let kind = classify(&root);
        Self {
            root,
            includes: Vec::new(),
            excludes: Vec::new(),
            line_ending: None,
            encoding: None,
            kind,
        }
    }

    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = Some(line_ending.into());
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }
}

fn classify(root: &Path) -> SourceSetKind {
    match root.file_name().and_then(|s| s.to_str()) {
        Some(GLOBAL_VARS_SEGMENT) => SourceSetKind::GlobalVarLibrary,
        _ => SourceSetKind::Plain,
    }
}

/// On-disk form of a source set. Hosts declare directories and filters; the
/// kind tag never round-trips, it is always re-derived from the root.
#[derive(Debug, Clone, Deserialize)]
struct SourceSetSpec {
    root: PathBuf,
    #[serde(default)]
    includes: Vec<String>,
    #[serde(default)]
    excludes: Vec<String>,
    #[serde(default)]
    line_ending: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

impl From<SourceSetSpec> for SourceSet {
    fn from(spec: SourceSetSpec) -> Self {
        let mut set = SourceSet::new(spec.root);
        set.includes = spec.includes;
        set.excludes = spec.excludes;
        set.line_ending = spec.line_ending;
        set.encoding = spec.encoding;
        set
    }
}

/// A discovered script source, one per matching file under a source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    pub path: PathBuf,
    pub base_name: String,
}

impl ScriptFile {
    pub fn new(path: PathBuf) -> Option<Self> {
        let base_name = path.file_name()?.to_str()?.to_string();
        Some(Self { path, base_name })
    }

    /// Base name with the source extension stripped.
    pub fn stem(&self) -> &str {
        Path::new(&self.base_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.base_name)
    }
}
