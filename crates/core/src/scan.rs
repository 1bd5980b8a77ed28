use crate::error::{Result, StubforgeError};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use stubforge_api::{ScriptFile, SourceSet, SuffixMapping};

pub struct Scanner;

impl Scanner {
    /// Collects the script sources of one source set, applying its
    /// include/exclude globs and the recognized suffix table.
    ///
    /// Results are sorted by path so every downstream stage sees the same
    /// order on every run. An empty directory is a valid, empty result.
    pub fn scan(set: &SourceSet) -> Result<Vec<ScriptFile>> {
        if !set.root.is_dir() {
            return Err(StubforgeError::SourceRoot(set.root.clone()));
        }

        let overrides = Self::build_overrides(set)?;

        let mut files = Vec::new();
        // Build input must not be subject to gitignore/hidden-file filtering
        let walk = WalkBuilder::new(&set.root)
            .overrides(overrides)
            .standard_filters(false)
            .build();
        for entry in walk {
            let entry = entry.map_err(|source| StubforgeError::Scan {
                path: set.root.clone(),
                source,
            })?;
            let path = entry.path();
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if is_file
                && SuffixMapping::lookup(path).is_some()
                && let Some(script) = ScriptFile::new(path.to_path_buf())
            {
                files.push(script);
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn build_overrides(set: &SourceSet) -> Result<ignore::overrides::Override> {
        let mut builder = OverrideBuilder::new(&set.root);
        for pattern in &set.includes {
            builder
                .add(pattern)
                .map_err(|source| StubforgeError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
        }
        for pattern in &set.excludes {
            let negated = format!("!{pattern}");
            builder
                .add(&negated)
                .map_err(|source| StubforgeError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
        }
        builder.build().map_err(|source| StubforgeError::Pattern {
            pattern: String::new(),
            source,
        })
    }
}
