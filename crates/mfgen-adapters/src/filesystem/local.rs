//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use mfgen_core::{application::ports::Filesystem, error::GenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn dir_has_entries(&self, path: &Path) -> GenResult<bool> {
        if !path.exists() {
            return Ok(false);
        }
        // A pre-existing plain file at the target path blocks generation
        // the same way a populated directory does.
        if path.is_file() {
            return Ok(true);
        }
        let mut entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        Ok(entries.next().is_some())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> mfgen_core::error::GenError {
    use mfgen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn dir_has_entries_false_for_missing_path() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(!fs.dir_has_entries(&temp.path().join("nope")).unwrap());
    }

    #[test]
    fn dir_has_entries_false_for_empty_dir() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(!fs.dir_has_entries(temp.path()).unwrap());
    }

    #[test]
    fn dir_has_entries_true_for_populated_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("x"), "y").unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.dir_has_entries(temp.path()).unwrap());
    }

    #[test]
    fn dir_has_entries_true_for_plain_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("blocker");
        std::fs::write(&file, "").unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.dir_has_entries(&file).unwrap());
    }

    #[test]
    fn write_and_exists_round_trip() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("a/b/c.txt");
        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "content").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
    }
}
