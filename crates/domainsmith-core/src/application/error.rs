//! Application layer errors.
//!
//! These errors represent failures in orchestration, not name validation.
//! Validation errors are `DomainError` from `crate::domain`.
//!
//! Most per-artifact failures never become an `ApplicationError` that leaves
//! the orchestrator: they are recorded in the `GenerationReport` and the run
//! continues. Only precondition failures abort a request.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::StubId;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A stub could not be found in any configured location.
    #[error("Stub file not found: {stub} (looked in {location})")]
    StubNotFound { stub: StubId, location: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The parent of a subdomain has not been generated.
    #[error("Parent domain '{parent}' does not exist at '{}'", .path.display())]
    ParentDomainMissing { parent: String, path: PathBuf },

    /// The subdomain directory is already there and --force was not given.
    #[error("Subdomain {name} already exists at '{}'", .path.display())]
    SubdomainExists { name: String, path: PathBuf },

    /// The single stub of a one-file request is missing.
    #[error("{stub} stub not found, nothing was generated")]
    StubUnavailable { stub: StubId },

    /// Store access failed (lock poisoned, etc.).
    #[error("Stub store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StubNotFound { stub, location } => vec![
                format!("Expected {} under {location}", stub.relative_path()),
                "Enable stubs.builtin_fallback to use the built-in copy".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ParentDomainMissing { parent, .. } => vec![
                format!("Generate the parent first: domainsmith generate-domain {parent}"),
                "Check --root points at the project root".into(),
            ],
            Self::SubdomainExists { .. } => vec![
                "Use --force to regenerate it (existing files are overwritten)".into(),
                "Choose a different subdomain name".into(),
            ],
            Self::StubUnavailable { stub } => vec![
                format!("Restore {} in your stub directory", stub.relative_path()),
                "Or enable stubs.builtin_fallback".into(),
            ],
            Self::StoreLockError => vec![
                "The stub store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StubNotFound { .. } | Self::StubUnavailable { .. } => ErrorCategory::NotFound,
            Self::ParentDomainMissing { .. } | Self::SubdomainExists { .. } => {
                ErrorCategory::Precondition
            }
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
