use crate::domain::error::DomainError;

/// Centralized input validation.
///
/// All checks on raw user input live here so that name derivation itself
/// can stay total over any non-empty string.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a raw domain/subdomain/value-object name and return it trimmed.
    pub fn validate_name<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName { field });
        }

        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(DomainError::InvalidName {
                field,
                input: raw.to_string(),
                reason: "name cannot contain path separators".into(),
            });
        }

        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-')))
        {
            return Err(DomainError::InvalidName {
                field,
                input: raw.to_string(),
                reason: format!("unsupported character '{bad}'"),
            });
        }

        if !trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidName {
                field,
                input: raw.to_string(),
                reason: "name must contain at least one letter".into(),
            });
        }

        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(DomainValidator::validate_name("name", "  Users ").unwrap(), "Users");
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(
            DomainValidator::validate_name("name", "   "),
            Err(DomainError::EmptyName { field: "name" })
        );
    }

    #[test]
    fn path_separators_are_rejected() {
        assert!(DomainValidator::validate_name("name", "../Users").is_err());
        assert!(DomainValidator::validate_name("name", "a\\b").is_err());
    }

    #[test]
    fn punctuation_is_rejected() {
        let err = DomainValidator::validate_name("name", "Users;").unwrap_err();
        assert!(matches!(err, DomainError::InvalidName { .. }));
    }

    #[test]
    fn digits_alone_are_rejected() {
        assert!(DomainValidator::validate_name("name", "123").is_err());
    }

    #[test]
    fn common_shapes_pass() {
        for name in ["Users", "blog_posts", "order-items", "Audit Logs", "Users2"] {
            assert!(DomainValidator::validate_name("name", name).is_ok(), "{name}");
        }
    }
}
