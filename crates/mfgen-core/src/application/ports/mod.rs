//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mfgen-adapters` crate provides implementations.

use crate::domain::{RenderContext, TemplateId};
use crate::error::GenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mfgen_adapters::filesystem::LocalFilesystem` (production)
/// - `mfgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GenResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> GenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// `true` if `path` is a directory containing at least one entry.
    /// A missing path returns `Ok(false)`.
    fn dir_has_entries(&self, path: &Path) -> GenResult<bool>;
}

/// Port for template rendering.
///
/// Implemented by `mfgen_adapters::renderer::SimpleRenderer` against the
/// built-in catalog. `render` is pure and deterministic: the same id and
/// context always yield byte-identical output. Static-copy templates have
/// no placeholders, so rendering them with an empty context *is* a
/// verbatim copy.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, id: TemplateId, context: &RenderContext) -> GenResult<String>;
}

/// Port for the post-generation collaborator.
///
/// Contract: run the package manager's install rooted at the generated
/// directory and report success/failure. The working directory is passed
/// explicitly; implementations must not mutate shared process state.
pub trait PostGenerationHook: Send + Sync {
    fn run(&self, app_dir: &Path) -> GenResult<()>;
}
