//! Directory-backed stub store with optional built-in fallback.

use std::path::{Path, PathBuf};

use domainsmith_core::{
    application::{ApplicationError, ports::StubStore},
    domain::StubId,
    error::SmithResult,
};
use tracing::{debug, warn};

use super::InMemoryStubStore;

/// Reads stubs from `<dir>/<relative path>`.
///
/// When a file is missing and a fallback is configured, the fallback copy is
/// served instead; otherwise the load fails with `StubNotFound`.
#[derive(Debug, Clone)]
pub struct DirectoryStubStore {
    dir: PathBuf,
    fallback: Option<InMemoryStubStore>,
}

impl DirectoryStubStore {
    /// Store without fallback: every stub must exist on disk.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fallback: None,
        }
    }

    /// Store that falls back to the built-in stubs.
    pub fn with_builtin_fallback(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fallback: Some(InMemoryStubStore::with_builtin()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, stub: StubId) -> PathBuf {
        self.dir.join(stub.relative_path())
    }
}

impl StubStore for DirectoryStubStore {
    fn load(&self, stub: StubId) -> SmithResult<String> {
        let path = self.path_of(stub);

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "Loaded stub override");
                Ok(text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => match &self.fallback {
                Some(fallback) => {
                    debug!(stub = %stub, "No override, using built-in stub");
                    fallback.load(stub)
                }
                None => Err(ApplicationError::StubNotFound {
                    stub,
                    location: self.describe(),
                }
                .into()),
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Stub unreadable");
                Err(ApplicationError::FilesystemError {
                    path,
                    reason: format!("Failed to read stub: {e}"),
                }
                .into())
            }
        }
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
