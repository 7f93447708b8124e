//! File materialization: the single place overwrite policy is decided.
//!
//! ```text
//! destination missing            -> write            -> Created
//! exists, force                  -> write            -> Replaced
//! exists, confirm() == true      -> write            -> Replaced
//! exists, confirm() == false     -> leave untouched  -> Skipped
//! write denied by storage        -> warn             -> Failed
//! ```

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use super::report::{ArtifactOutcome, DirectoryOutcome};
use crate::application::ports::{Console, Filesystem};

pub struct FileMaterializer<'a> {
    fs: &'a dyn Filesystem,
    console: &'a dyn Console,
}

impl<'a> FileMaterializer<'a> {
    pub fn new(fs: &'a dyn Filesystem, console: &'a dyn Console) -> Self {
        Self { fs, console }
    }

    /// Create `path` (and parents) unless it is already a directory.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn ensure_directory(&self, path: &Path) -> DirectoryOutcome {
        if self.fs.is_dir(path) {
            debug!("Directory already exists");
            self.console
                .info(&format!("Directory already exists: {}", path.display()));
            return DirectoryOutcome::AlreadyExisted;
        }

        match self.fs.create_dir_all(path) {
            Ok(()) => {
                info!("Directory created");
                self.console
                    .info(&format!("Created directory: {}", path.display()));
                DirectoryOutcome::Created
            }
            Err(e) => {
                warn!(error = %e, "Directory creation failed");
                self.console.warn(&format!(
                    "Failed to create directory: {} ({e})",
                    path.display()
                ));
                DirectoryOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Write `contents` to `path`, subject to the overwrite policy.
    #[instrument(skip(self, contents), fields(path = %path.display()))]
    pub fn materialize(&self, path: &Path, contents: &str, force: bool) -> ArtifactOutcome {
        if let Err(outcome) = self.ensure_parent(path) {
            return outcome;
        }

        let existed = self.fs.exists(path);
        if existed && !force {
            let question = format!("File {} already exists. Overwrite?", path.display());
            if !self.console.confirm(&question, true) {
                info!("Overwrite declined");
                self.console
                    .info(&format!("Skipped file: {}", path.display()));
                return ArtifactOutcome::Skipped;
            }
        }

        self.write(path, contents, existed)
    }

    /// Write `contents` only when nothing exists at `path`; never prompts.
    #[instrument(skip(self, contents), fields(path = %path.display()))]
    pub fn create_if_absent(&self, path: &Path, contents: &str) -> ArtifactOutcome {
        if self.fs.exists(path) {
            debug!("File present, left as is");
            self.console
                .info(&format!("Skipped file (already present): {}", path.display()));
            return ArtifactOutcome::Skipped;
        }
        if let Err(outcome) = self.ensure_parent(path) {
            return outcome;
        }
        self.write(path, contents, false)
    }

    fn ensure_parent(&self, path: &Path) -> Result<(), ArtifactOutcome> {
        let Some(parent) = path.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() || self.fs.is_dir(parent) {
            return Ok(());
        }
        match self.ensure_directory(parent) {
            DirectoryOutcome::Failed { reason } => Err(ArtifactOutcome::Failed { reason }),
            _ => Ok(()),
        }
    }

    fn write(&self, path: &Path, contents: &str, existed: bool) -> ArtifactOutcome {
        match self.fs.write_file(path, contents) {
            Ok(()) if existed => {
                info!(bytes = contents.len(), "File replaced");
                self.console
                    .info(&format!("Replaced file: {}", path.display()));
                ArtifactOutcome::Replaced
            }
            Ok(()) => {
                info!(bytes = contents.len(), "File created");
                self.console
                    .info(&format!("Created file: {}", path.display()));
                ArtifactOutcome::Created
            }
            Err(e) => {
                warn!(error = %e, "Write failed");
                self.console
                    .warn(&format!("Failed to write file: {} ({e})", path.display()));
                ArtifactOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockConsole, MockFilesystem};
    use std::path::PathBuf;

    fn quiet_console() -> MockConsole {
        let mut console = MockConsole::new();
        console.expect_info().return_const(());
        console.expect_warn().return_const(());
        console
    }

    fn fs_with_existing_file() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().return_const(true);
        fs
    }

    #[test]
    fn missing_file_is_created() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().return_const(false);
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        let mut console = quiet_console();
        console.expect_confirm().never();

        let outcome = FileMaterializer::new(&fs, &console).materialize(
            Path::new("/p/app/Models/User.php"),
            "<?php",
            false,
        );
        assert_eq!(outcome, ArtifactOutcome::Created);
    }

    #[test]
    fn force_replaces_without_asking() {
        let mut fs = fs_with_existing_file();
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        let mut console = quiet_console();
        console.expect_confirm().never();

        let outcome =
            FileMaterializer::new(&fs, &console).materialize(Path::new("/p/User.php"), "new", true);
        assert_eq!(outcome, ArtifactOutcome::Replaced);
    }

    #[test]
    fn accepted_prompt_replaces() {
        let mut fs = fs_with_existing_file();
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        let mut console = quiet_console();
        console
            .expect_confirm()
            .withf(|q, default| q.contains("already exists. Overwrite?") && *default)
            .times(1)
            .return_const(true);

        let outcome =
            FileMaterializer::new(&fs, &console).materialize(Path::new("/p/User.php"), "new", false);
        assert_eq!(outcome, ArtifactOutcome::Replaced);
    }

    #[test]
    fn declined_prompt_never_writes() {
        let mut fs = fs_with_existing_file();
        fs.expect_write_file().never();
        let mut console = quiet_console();
        console.expect_confirm().times(1).return_const(false);

        let outcome =
            FileMaterializer::new(&fs, &console).materialize(Path::new("/p/User.php"), "new", false);
        assert_eq!(outcome, ArtifactOutcome::Skipped);
    }

    #[test]
    fn write_failure_is_reported_not_raised() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().return_const(false);
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });
        let mut console = MockConsole::new();
        console.expect_info().never();
        console
            .expect_warn()
            .withf(|m| m.starts_with("Failed to write file:"))
            .times(1)
            .return_const(());

        let outcome =
            FileMaterializer::new(&fs, &console).materialize(Path::new("/p/User.php"), "x", false);
        assert!(matches!(outcome, ArtifactOutcome::Failed { reason } if reason.contains("read-only")));
    }

    #[test]
    fn missing_parent_is_created_first() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/p/app/Policies"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        let console = quiet_console();

        let outcome = FileMaterializer::new(&fs, &console).materialize(
            Path::new("/p/app/Policies/UserPolicy.php"),
            "x",
            false,
        );
        assert_eq!(outcome, ArtifactOutcome::Created);
    }

    #[test]
    fn existing_directory_is_not_an_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().never();
        let mut console = MockConsole::new();
        console
            .expect_info()
            .withf(|m| m.starts_with("Directory already exists:"))
            .times(1)
            .return_const(());

        let outcome =
            FileMaterializer::new(&fs, &console).ensure_directory(&PathBuf::from("/p/app/Models"));
        assert_eq!(outcome, DirectoryOutcome::AlreadyExisted);
    }

    #[test]
    fn create_if_absent_leaves_existing_file() {
        let mut fs = fs_with_existing_file();
        fs.expect_write_file().never();
        let mut console = quiet_console();
        console.expect_confirm().never();

        let outcome = FileMaterializer::new(&fs, &console)
            .create_if_absent(Path::new("/p/app/Models/BaseModel.php"), "x");
        assert_eq!(outcome, ArtifactOutcome::Skipped);
    }
}
