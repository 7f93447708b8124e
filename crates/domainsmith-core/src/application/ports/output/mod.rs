//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `domainsmith-adapters` crate provides implementations; the CLI
//! provides the `Console`.

use std::path::{Path, PathBuf};

use crate::domain::StubId;
use crate::error::SmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `domainsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `domainsmith_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Whether anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> SmithResult<String>;

    /// Write content to a file, replacing it if present. Parents must exist.
    fn write_file(&self, path: &Path, content: &str) -> SmithResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SmithResult<()>;

    /// Direct children of a directory, sorted.
    fn list_dir(&self, path: &Path) -> SmithResult<Vec<PathBuf>>;
}

/// Port for stub retrieval.
///
/// Implemented by:
/// - `domainsmith_adapters::stub_store::InMemoryStubStore` (built-in stubs)
/// - `domainsmith_adapters::stub_store::DirectoryStubStore` (user overrides)
#[cfg_attr(test, mockall::automock)]
pub trait StubStore: Send + Sync {
    /// Raw template text, or `ApplicationError::StubNotFound`.
    fn load(&self, stub: StubId) -> SmithResult<String>;

    /// Where stubs are read from, for messages.
    fn describe(&self) -> String;
}

/// Port for user-facing progress lines and overwrite confirmation.
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    /// Ask a yes/no question; `default` is the answer on a bare Enter.
    fn confirm(&self, question: &str, default: bool) -> bool;
}

/// The "make provider" collaborator: creates a fresh registration file.
#[cfg_attr(test, mockall::automock)]
pub trait ProviderScaffolder: Send + Sync {
    fn make_provider(&self, path: &Path) -> SmithResult<()>;
}

/// Source of migration timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// `YYYY_MM_DD_HHMMSS`
    fn migration_timestamp(&self) -> String;
}
