//! Interface to the external stub compiler.
//!
//! The pipeline never interprets stub content; it only configures the
//! compiler, hands it files, and reads back how many stubs it produced.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration keys recognized by stub compiler implementations.
pub mod options {
    /// Encoding the compiler uses when reading source files.
    pub const SOURCE_ENCODING: &str = "source.encoding";
}

/// Failure raised by a stub compiler implementation.
#[derive(Debug, Error)]
#[error("stub compiler failed: {message}")]
pub struct CompilerError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CompilerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// A compiler that parses script sources and emits host-language stubs.
///
/// Implementations accumulate configuration and pending files, then perform
/// all work in [`compile`](StubCompiler::compile), which is called exactly
/// once per run and returns the number of stubs written.
pub trait StubCompiler {
    fn set_target_directory(&mut self, dir: &Path);

    fn set_class_path(&mut self, entries: &[PathBuf]);

    /// Sets a configuration option; unrecognized keys are ignored.
    fn set_option(&mut self, key: &str, value: &str);

    /// Queues a source file for stub generation.
    fn add(&mut self, source: &Path);

    fn compile(&mut self) -> Result<usize, CompilerError>;
}
