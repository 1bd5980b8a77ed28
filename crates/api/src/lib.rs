pub mod compiler;
pub mod host;
pub mod model;

// Re-export commonly used types
pub use compiler::{CompilerError, StubCompiler, options};
pub use host::BuildHost;
pub use model::{
    GLOBAL_VARS_SEGMENT, STUB_MAPPINGS, ScriptFile, SourceSet, SourceSetKind, SuffixMapping,
};
