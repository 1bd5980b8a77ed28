use crate::config::StubConfig;
use crate::error::{Result, StubforgeError};
use crate::globals::GlobalVarTransformer;
use crate::normalize;
use crate::scan::Scanner;
use std::fs;
use stubforge_api::{BuildHost, SourceSet, SourceSetKind, StubCompiler, options};
use tracing::{debug, info};

/// Drives one stub generation run: scan, transform, compile, normalize.
///
/// The run is strictly sequential and aborts on the first error; a partially
/// generated stub set would leave the Java compiler resolving against an
/// inconsistent symbol set.
pub struct StubGenerator {
    config: StubConfig,
}

impl StubGenerator {
    pub fn new(config: StubConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    /// Generates stubs for every source set, then rewrites the timestamps of
    /// everything under the output directory to the Unix epoch. Returns the
    /// compiler's stub count.
    pub fn run(
        &self,
        host: &mut dyn BuildHost,
        compiler: &mut dyn StubCompiler,
        sources: &[SourceSet],
    ) -> Result<usize> {
        let count = self.generate(host, compiler, sources)?;
        normalize::reset_stub_timestamps(&self.config.output_dir)?;
        Ok(count)
    }

    fn generate(
        &self,
        host: &mut dyn BuildHost,
        compiler: &mut dyn StubCompiler,
        sources: &[SourceSet],
    ) -> Result<usize> {
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| StubforgeError::io(&self.config.output_dir, e))?;

        compiler.set_target_directory(&self.config.output_dir);
        compiler.set_class_path(&self.config.class_path);
        if let Some(encoding) = &self.config.source_encoding {
            compiler.set_option(options::SOURCE_ENCODING, encoding);
        }

        // Downstream steps must see the stub output tree; registered once
        // per run no matter how many source sets feed it.
        host.add_source_root(&self.config.output_dir);

        for set in sources {
            let processed = self.prepare(set)?;
            host.add_source_root(&processed.root);

            for script in Scanner::scan(&processed)? {
                debug!(" + {}", script.path.display());
                compiler.add(&script.path);
                host.force_compile(&script.path);
            }
        }

        let count = compiler.compile()?;

        match count {
            0 => info!("no sources found for Java stub generation"),
            1 => info!("generated 1 Java stub"),
            n => info!("generated {n} Java stubs"),
        }

        Ok(count)
    }

    /// Applies the global variable transform when the set's tag asks for it.
    fn prepare(&self, set: &SourceSet) -> Result<SourceSet> {
        match set.kind {
            SourceSetKind::Plain => Ok(set.clone()),
            SourceSetKind::GlobalVarLibrary => {
                info!(
                    "discovered global variable library at {}",
                    set.root.display()
                );
                let scripts = Scanner::scan(set)?;
                let transformer = GlobalVarTransformer::new(&self.config.generated_sources_dir);
                transformer.transform(set, &scripts)
            }
        }
    }
}
