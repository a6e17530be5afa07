//! Infrastructure adapters for mfgen.
//!
//! This crate implements the ports defined in `mfgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod filesystem;
pub mod installer;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::NpmInstaller;
pub use renderer::SimpleRenderer;
