use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StubforgeError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("source root {} is not a readable directory", .0.display())]
    SourceRoot(PathBuf),
    #[error("invalid source pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
    #[error("global variables {existing} and {conflicting} both map to wrapper class {class_name}")]
    VariableCollision {
        existing: String,
        conflicting: String,
        class_name: String,
    },
    #[error("failed to enumerate stub output under {}: {source}", path.display())]
    OutputWalk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error(transparent)]
    Compiler(#[from] stubforge_api::CompilerError),
}

impl StubforgeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StubforgeError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StubforgeError>;
