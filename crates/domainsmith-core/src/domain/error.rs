// ============================================================================
// domain/error.rs - NAME AND OPTION VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are raised before any side effect happens: they describe
/// user input that cannot be turned into a generation request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("{field} cannot be empty")]
    EmptyName { field: &'static str },

    #[error("invalid {field} '{input}': {reason}")]
    InvalidName {
        field: &'static str,
        input: String,
        reason: String,
    },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("--{option} requires --{requires}")]
    MissingRequiredOption {
        option: &'static str,
        requires: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName { field } => vec![
                format!("Provide a non-empty {field}"),
                "Example: domainsmith generate-domain Users".into(),
            ],
            Self::InvalidName { input, .. } => vec![
                format!("'{input}' cannot be used as a directory or class name"),
                "Use letters, digits, spaces, hyphens and underscores only".into(),
                "Examples: Users, BlogPosts, order_items".into(),
            ],
            Self::MissingRequiredOption { option, requires } => vec![
                format!("--{option} is only meaningful together with --{requires}"),
                format!("Example: --{requires}=Users --{option}=Profiles"),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName { .. } | Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::MissingRequiredOption { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
