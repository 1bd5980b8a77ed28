use std::fs;
use std::path::{Path, PathBuf};
use stubforge_api::{BuildHost, CompilerError, StubCompiler};

/// Stand-in for the external stub compiler: records everything it is told
/// and, on compile, writes one `.java` stub per queued source into the
/// target directory.
#[derive(Default)]
pub struct RecordingCompiler {
    pub target: Option<PathBuf>,
    pub class_path: Vec<PathBuf>,
    pub options: Vec<(String, String)>,
    pub files: Vec<PathBuf>,
    pub fail: bool,
}

impl RecordingCompiler {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl StubCompiler for RecordingCompiler {
    fn set_target_directory(&mut self, dir: &Path) {
        self.target = Some(dir.to_path_buf());
    }

    fn set_class_path(&mut self, entries: &[PathBuf]) {
        self.class_path = entries.to_vec();
    }

    fn set_option(&mut self, key: &str, value: &str) {
        self.options.push((key.to_string(), value.to_string()));
    }

    fn add(&mut self, source: &Path) {
        self.files.push(source.to_path_buf());
    }

    fn compile(&mut self) -> Result<usize, CompilerError> {
        if self.fail {
            return Err(CompilerError::new("parse failure in queued sources"));
        }
        let target = self
            .target
            .as_ref()
            .ok_or_else(|| CompilerError::new("no target directory configured"))?;
        for file in &self.files {
            let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("Stub");
            fs::write(target.join(format!("{stem}.java")), format!("class {stem} {{}}\n"))
                .map_err(|e| CompilerError::with_source("failed to write stub", e))?;
        }
        Ok(self.files.len())
    }
}

/// Stand-in for the build tool: records registered roots and forced files.
#[derive(Default)]
pub struct RecordingHost {
    pub source_roots: Vec<PathBuf>,
    pub forced: Vec<PathBuf>,
}

impl BuildHost for RecordingHost {
    fn add_source_root(&mut self, dir: &Path) {
        self.source_roots.push(dir.to_path_buf());
    }

    fn force_compile(&mut self, file: &Path) {
        self.forced.push(file.to_path_buf());
    }
}
