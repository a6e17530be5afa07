//! Generate Service - main application orchestrator (the file tree builder).
//!
//! This service coordinates the generation workflow:
//! 1. Pre-flight check on the target directory
//! 2. Create the directory skeleton
//! 3. Resolve each target's context, render, write
//! 4. Return the complete list of written paths
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{ConfigModel, CrossReferenceResolver, GenerationPlan},
    error::GenResult,
};

/// Main generation service.
///
/// Walks the [`GenerationPlan`] for a validated configuration and
/// materializes it under `output_root/<app_name>`.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// The plan that [`Self::generate`] would materialize. Exposed for
    /// dry-run display; computing it performs no I/O.
    pub fn plan(config: &ConfigModel) -> GenerationPlan {
        GenerationPlan::for_config(config)
    }

    /// Generate the full tree for `config` under `output_root`.
    ///
    /// On success, returns every written file path; every returned path
    /// exists and is readable, and no file was written outside the list.
    ///
    /// On failure the error names the failing target. No rollback is
    /// attempted: the partial tree is left in place for the caller to
    /// inspect or delete.
    #[instrument(
        skip_all,
        fields(
            app = %config.app_name(),
            output_root = %output_root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        config: &ConfigModel,
        output_root: impl AsRef<Path>,
    ) -> GenResult<Vec<PathBuf>> {
        let app_dir = output_root.as_ref().join(config.app_name());

        // 1. Pre-flight: never generate into a populated directory.
        if self.filesystem.dir_has_entries(&app_dir)? {
            return Err(ApplicationError::ProjectExists { path: app_dir }.into());
        }

        info!(
            microfrontends = config.microfrontends().len(),
            host_port = config.host_port(),
            "Generation started"
        );

        let plan = GenerationPlan::for_config(config);

        // 2. Directory skeleton, app root first.
        self.filesystem.create_dir_all(&app_dir)?;
        for dir in &plan.directories {
            self.filesystem.create_dir_all(&app_dir.join(dir))?;
        }

        // 3. Render and write every target. Abort on the first failure;
        // the error carries the failing path, nothing is skipped silently.
        let mut written = Vec::with_capacity(plan.file_count());
        for target in &plan.targets {
            let context = CrossReferenceResolver::context_for(config, target)?;
            let content = self.renderer.render(target.template, &context)?;

            let path = app_dir.join(&target.path);
            self.filesystem.write_file(&path, &content)?;
            debug!(path = %path.display(), template = %target.template, "Target written");
            written.push(path);
        }

        info!(files = written.len(), "Generation completed");
        Ok(written)
    }
}
