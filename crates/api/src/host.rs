//! Interface to the enclosing build tool.

use std::path::Path;

/// The build tool the pipeline runs inside.
///
/// The host owns dependency resolution and the downstream compilation steps;
/// the pipeline only tells it which directories feed those steps and which
/// files must be recompiled.
pub trait BuildHost {
    /// Registers a directory as an input root for downstream compilation so
    /// other build steps can process anything generated into it.
    fn add_source_root(&mut self, dir: &Path);

    /// Marks a source file for recompilation regardless of its freshness.
    fn force_compile(&mut self, file: &Path);
}
