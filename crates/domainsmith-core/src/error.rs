//! Unified error handling for domainsmith core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for domainsmith core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SmithError {
    /// Errors from the domain layer (invalid names and option combinations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SmithError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Run: domainsmith config list".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in domainsmith".into(),
                "Please report this issue at: https://github.com/cosecruz/domainsmith/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Precondition,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SmithResult<T> = Result<T, SmithError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn categories_flow_through() {
        let err: SmithError = DomainError::EmptyName { field: "name" }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);

        let err: SmithError = ApplicationError::ParentDomainMissing {
            parent: "Users".into(),
            path: PathBuf::from("app/Domains/Users"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Precondition);
        assert!(err.to_string().contains("Parent domain 'Users' does not exist"));
    }
}
