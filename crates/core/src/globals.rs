//! Global variable library transform.
//!
//! A pipeline shared library keeps one script per global variable under a
//! `vars/` directory. Scripts there are bare bodies, not classes, so the stub
//! compiler cannot type them directly. Each script is rewritten into a
//! generated wrapper class, and a registry module declares one field per
//! variable so Java sources can resolve the whole set.

use crate::error::{Result, StubforgeError};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use stubforge_api::{ScriptFile, SourceSet};
use tracing::debug;

/// Package the generated wrapper classes live in.
pub const GLOBAL_VARS_PACKAGE: &str = "globalvars";
/// Directory under the generated-sources area holding the rewritten tree.
pub const INTERMEDIATE_DIR: &str = "globalVarsTmp";
/// Class name of the generated registry module.
pub const REGISTRY_CLASS: &str = "GlobalVars";
/// File name of the generated registry module.
pub const REGISTRY_FILE: &str = "Vars.groovy";

/// Rewrites the scripts of one global variable library into an intermediate
/// source tree the stub compiler can type. Original scripts are only read,
/// never touched.
pub struct GlobalVarTransformer {
    intermediate_dir: PathBuf,
}

impl GlobalVarTransformer {
    pub fn new(generated_sources_dir: &Path) -> Self {
        Self {
            intermediate_dir: generated_sources_dir.join(INTERMEDIATE_DIR),
        }
    }

    pub fn intermediate_dir(&self) -> &Path {
        &self.intermediate_dir
    }

    /// Writes one wrapper module per script plus the registry module, and
    /// returns the source set that replaces the original one.
    ///
    /// `scripts` must come from scanning the triggering set, so entries are
    /// path-ordered; the registry preserves that order. Two scripts whose
    /// names differ only in case derive the same wrapper class, which is a
    /// hard error.
    pub fn transform(&self, set: &SourceSet, scripts: &[ScriptFile]) -> Result<SourceSet> {
        let package_dir = self.intermediate_dir.join(GLOBAL_VARS_PACKAGE);
        fs::create_dir_all(&package_dir).map_err(|e| StubforgeError::io(&package_dir, e))?;

        let mut registry: IndexMap<String, String> = IndexMap::with_capacity(scripts.len());
        for script in scripts {
            let variable = script.stem().to_string();
            let class_name = wrapper_class_name(&variable);
            if let Some((existing, _)) = registry.iter().find(|(_, c)| **c == class_name) {
                return Err(StubforgeError::VariableCollision {
                    existing: existing.clone(),
                    conflicting: variable,
                    class_name,
                });
            }

            let dest = package_dir.join(format!("{class_name}.groovy"));
            self.write_wrapper(&script.path, &dest, &class_name)?;
            debug!(script = %script.path.display(), class = %class_name, "wrapped global variable");
            registry.insert(variable, class_name);
        }

        self.write_registry(&registry)?;

        let mut replacement = SourceSet::new(&self.intermediate_dir);
        replacement.includes = set.includes.clone();
        replacement.line_ending = set.line_ending.clone();
        replacement.encoding = set.encoding.clone();
        Ok(replacement)
    }

    fn write_wrapper(&self, script: &Path, dest: &Path, class_name: &str) -> Result<()> {
        let reader = BufReader::new(File::open(script).map_err(|e| StubforgeError::io(script, e))?);
        let mut out =
            BufWriter::new(File::create(dest).map_err(|e| StubforgeError::io(dest, e))?);

        let write = |out: &mut BufWriter<File>, text: &str| -> Result<()> {
            out.write_all(text.as_bytes())
                .map_err(|e| StubforgeError::io(dest, e))
        };

        write(&mut out, &format!("package {GLOBAL_VARS_PACKAGE}\n\n"))?;
        write(&mut out, &format!("class {class_name} {{\n"))?;
        for line in reader.lines() {
            let line = line.map_err(|e| StubforgeError::io(script, e))?;
            write(&mut out, &transform_line(&line))?;
            write(&mut out, "\n")?;
        }
        write(&mut out, "\n}\n")?;
        out.flush().map_err(|e| StubforgeError::io(dest, e))
    }

    fn write_registry(&self, entries: &IndexMap<String, String>) -> Result<()> {
        let dest = self.intermediate_dir.join(REGISTRY_FILE);
        let mut out =
            BufWriter::new(File::create(&dest).map_err(|e| StubforgeError::io(&dest, e))?);

        let write = |out: &mut BufWriter<File>, text: &str| -> Result<()> {
            out.write_all(text.as_bytes())
                .map_err(|e| StubforgeError::io(&dest, e))
        };

        write(&mut out, &format!("class {REGISTRY_CLASS} {{\n"))?;
        for (variable, class_name) in entries {
            write(&mut out, &format!("/** Global variable {variable} */\n"))?;
            write(
                &mut out,
                &format!("{GLOBAL_VARS_PACKAGE}.{class_name} {variable}\n"),
            )?;
        }
        write(&mut out, "}\n")?;
        out.flush().map_err(|e| StubforgeError::io(&dest, e))
    }
}

/// `"Var"` plus the uppercased variable name.
pub fn wrapper_class_name(variable: &str) -> String {
    format!("Var{}", variable.to_uppercase())
}

/// A leading `#` turns the line into a Groovy comment, keeping the original
/// text (including the `#`) verbatim; every other line passes through.
fn transform_line(line: &str) -> Cow<'_, str> {
    if line.starts_with('#') {
        Cow::Owned(format!("// {line}"))
    } else {
        Cow::Borrowed(line)
    }
}
