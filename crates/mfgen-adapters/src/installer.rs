//! Post-generation dependency installation.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use mfgen_core::{
    application::{ApplicationError, ports::PostGenerationHook},
    error::GenResult,
};
use tracing::{debug, instrument};

/// Runs `npm install` inside a generated project.
///
/// The target directory is passed to the subprocess as its working
/// directory, so the generator's own working directory never changes.
#[derive(Debug, Clone, Copy)]
pub struct NpmInstaller;

impl NpmInstaller {
    /// Create a new npm installer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl PostGenerationHook for NpmInstaller {
    #[instrument(skip_all, fields(dir = %app_dir.display()))]
    fn run(&self, app_dir: &Path) -> GenResult<()> {
        debug!("running npm install");

        let status = Command::new("npm")
            .arg("install")
            .current_dir(app_dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ApplicationError::Filesystem {
                path: app_dir.to_path_buf(),
                reason: format!("Failed to run npm install: {}", e),
            })?;

        if !status.success() {
            return Err(ApplicationError::Filesystem {
                path: app_dir.to_path_buf(),
                reason: format!("npm install exited with {}", status),
            }
            .into());
        }

        debug!("npm install complete");
        Ok(())
    }
}
