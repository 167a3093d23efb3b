//! Domain-level error types.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub(crate) const REQUIRED: &str = "This field is required.";
pub(crate) const BLANK: &str = "This field may not be blank.";

/// Domain errors - business logic failures surfaced at the service boundary.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("No blogs found in the last {days} days.")]
    NothingInWindow { days: i64 },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}

/// Field-level validation messages, keyed by input field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for `field`, empty if none.
    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    /// Check a required text field.
    ///
    /// Surrounding whitespace is trimmed. Returns `Some` only when no error
    /// was recorded for the field.
    pub fn require_text(
        &mut self,
        field: &str,
        value: Option<String>,
        max_len: Option<usize>,
    ) -> Option<String> {
        let Some(value) = value else {
            self.add(field, REQUIRED);
            return None;
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.add(field, BLANK);
            return None;
        }

        if let Some(max) = max_len {
            if trimmed.chars().count() > max {
                self.add(
                    field,
                    format!("Ensure this field has no more than {} characters.", max),
                );
                return None;
            }
        }

        Some(trimmed.to_string())
    }

    /// Check a required secret. Secrets are never trimmed.
    pub fn require_secret(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            None => {
                self.add(field, REQUIRED);
                None
            }
            Some(v) if v.is_empty() => {
                self.add(field, BLANK);
                None
            }
            Some(v) => Some(v),
        }
    }

    /// Check a required reference; records an error when it is missing.
    pub fn require_ref(&mut self, field: &str, value: Option<Uuid>) -> Option<Uuid> {
        if value.is_none() {
            self.add(field, REQUIRED);
        }
        value
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims_and_accepts() {
        let mut errors = ValidationErrors::new();
        let value = errors.require_text("title", Some("  Hello  ".to_string()), Some(10));

        assert_eq!(value.as_deref(), Some("Hello"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_require_text_missing_blank_and_too_long() {
        let mut errors = ValidationErrors::new();

        assert!(errors.require_text("title", None, None).is_none());
        assert!(errors.require_text("content", Some("   ".to_string()), None).is_none());
        assert!(
            errors
                .require_text("name", Some("abcdef".to_string()), Some(5))
                .is_none()
        );

        assert_eq!(errors.field("title"), [REQUIRED]);
        assert_eq!(errors.field("content"), [BLANK]);
        assert_eq!(
            errors.field("name"),
            ["Ensure this field has no more than 5 characters."]
        );
    }

    #[test]
    fn test_require_secret_keeps_whitespace() {
        let mut errors = ValidationErrors::new();
        let secret = errors.require_secret("password", Some(" pass ".to_string()));

        assert_eq!(secret.as_deref(), Some(" pass "));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("username", "An author with that username already exists.");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": ["An author with that username already exists."]})
        );
    }

    #[test]
    fn test_repo_error_becomes_internal() {
        let err: DomainError = RepoError::Query("boom".to_string()).into();
        assert!(matches!(err, DomainError::Internal(msg) if msg.contains("boom")));
    }
}
