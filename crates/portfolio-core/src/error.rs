//! Error types for contact-message intake
//!
//! Two failure classes exist in this system: validation failures, which are
//! recoverable by the caller (fix the input and resubmit) and never touch
//! the store, and storage failures, which mean a validated message could
//! not be persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The JSON field that violated its constraint (e.g. `name`)
    pub field: String,
    /// Human-readable reason, suitable for display to the submitter
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// One or more field constraints violated by a contact submission.
///
/// Always carries every violated field, not just the first; callers render
/// the combined summary with [`ValidationError::summary`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join_messages(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Create a validation error from the collected field violations.
    ///
    /// The caller guarantees `errors` is non-empty; an empty list would
    /// mean the submission was valid.
    pub fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    /// The individual field violations, in schema order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether a particular field is among the violations.
    pub fn mentions(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Joined human-readable summary of every violation.
    pub fn summary(&self) -> String {
        join_messages(&self.errors)
    }
}

/// Failure of the persistence operation after successful validation.
///
/// The variant detail is for logs only; the HTTP boundary collapses every
/// storage failure into a generic response so internal causes never leak
/// to the submitter.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The persistence medium could not be opened or is not reachable
    #[error("Store not available: {0}")]
    Unavailable(String),

    /// The append itself failed; no record was created
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// The record could not be encoded for persistence
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying medium
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create an unavailable-medium error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        StorageError::Unavailable(msg.into())
    }

    /// Create a failed-write error
    pub fn write_failed(msg: impl Into<String>) -> Self {
        StorageError::WriteFailed(msg.into())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_joins_every_violation() {
        let err = ValidationError::new(vec![
            FieldError::new("name", "Name must be at least 2 characters"),
            FieldError::new("email", "Please enter a valid email address"),
        ]);
        assert_eq!(
            err.summary(),
            "Name must be at least 2 characters; Please enter a valid email address"
        );
        assert!(err.mentions("name"));
        assert!(err.mentions("email"));
        assert!(!err.mentions("subject"));
    }

    #[test]
    fn validation_error_display_includes_summary() {
        let err = ValidationError::new(vec![FieldError::new("subject", "too short")]);
        assert_eq!(err.to_string(), "validation failed: too short");
    }

    #[test]
    fn storage_error_constructors() {
        let err = StorageError::unavailable("disk gone");
        assert!(matches!(err, StorageError::Unavailable(_)));
        assert_eq!(err.to_string(), "Store not available: disk gone");

        let err = StorageError::write_failed("tree closed");
        assert!(matches!(err, StorageError::WriteFailed(_)));
    }
}
