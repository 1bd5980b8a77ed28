use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Immutable configuration for one stub generation run.
///
/// Every stage receives this value explicitly; nothing reads configuration
/// out of shared mutable state mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StubConfig {
    /// Directory the stub compiler writes generated Java sources into.
    pub output_dir: PathBuf,
    /// Build-private generated-sources area; the global variable transform
    /// keeps its intermediate tree under here.
    pub generated_sources_dir: PathBuf,
    /// Classpath handed to the stub compiler.
    #[serde(default)]
    pub class_path: Vec<PathBuf>,
    /// Encoding for reading sources; `None` defers to the project default.
    #[serde(default)]
    pub source_encoding: Option<String>,
}

impl StubConfig {
    pub fn new(output_dir: impl Into<PathBuf>, generated_sources_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            generated_sources_dir: generated_sources_dir.into(),
            class_path: Vec::new(),
            source_encoding: None,
        }
    }

    pub fn with_class_path(mut self, class_path: Vec<PathBuf>) -> Self {
        self.class_path = class_path;
        self
    }

    pub fn with_source_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.source_encoding = Some(encoding.into());
        self
    }
}
