//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use domainsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SmithError, SmithResult},
};

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
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> SmithResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SmithResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> SmithResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn list_dir(&self, path: &Path) -> SmithResult<Vec<PathBuf>> {
        let entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut children = entries
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| map_io_error(path, e, "read directory entry"))?;
        children.sort();
        Ok(children)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SmithError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("app/Models");

        fs.create_dir_all(&nested).unwrap();
        assert!(fs.is_dir(&nested));

        let file = nested.join("User.php");
        fs.write_file(&file, "<?php").unwrap();
        assert!(fs.exists(&file));
        assert!(!fs.is_dir(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "<?php");
    }

    #[test]
    fn list_dir_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        for name in ["b.php", "a.php", "c.php"] {
            fs.write_file(&dir.path().join(name), "").unwrap();
        }

        let names: Vec<_> = fs
            .list_dir(dir.path())
            .unwrap()
            .into_iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, vec!["a.php", "b.php", "c.php"]);
    }

    #[test]
    fn write_without_parent_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing/User.php");

        let err = LocalFilesystem::new()
            .write_file(&target, "x")
            .unwrap_err();
        assert!(matches!(
            err,
            SmithError::Application(ApplicationError::FilesystemError { ref path, .. }) if *path == target
        ));
    }
}
