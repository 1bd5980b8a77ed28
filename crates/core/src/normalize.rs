//! Stub output timestamp normalization.

use crate::error::{Result, StubforgeError};
use std::fs::OpenOptions;
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

/// Resets the modification time of every file under `output_dir` to the Unix
/// epoch, directories excluded.
///
/// The Java compiler decides staleness by comparing a source's timestamp
/// against its compiled artifact. A freshly written stub is always newer than
/// the class compiled from the real Groovy source, so without this pass the
/// Java compiler would regenerate the class from the stub and discard correct
/// output. An epoch timestamp takes the stub out of staleness consideration
/// while Javadoc and friends, which only read content, keep working.
///
/// Must run after the compiler has finished writing: the walk expects a
/// quiescent tree.
pub fn reset_stub_timestamps(output_dir: &Path) -> Result<()> {
    for entry in WalkDir::new(output_dir) {
        let entry = entry.map_err(|source| StubforgeError::OutputWalk {
            path: output_dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file = OpenOptions::new()
            .write(true)
            .open(entry.path())
            .map_err(|e| StubforgeError::io(entry.path(), e))?;
        file.set_modified(SystemTime::UNIX_EPOCH)
            .map_err(|e| StubforgeError::io(entry.path(), e))?;
    }
    Ok(())
}
