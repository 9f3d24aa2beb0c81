//! Contact message types
//!
//! Two shapes, one per stage of the intake pipeline:
//!
//! - [`ValidatedContact`]: a submission that passed every field constraint.
//!   Only the validator constructs one from the raw JSON payload.
//! - [`ContactMessage`]: the persisted record, with its store-assigned id
//!   and creation timestamp. Immutable after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact submission that satisfied every schema constraint.
///
/// Produced by [`crate::validator::validate_submission`]; the store accepts
/// only this type, so an unvalidated payload can never reach persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A persisted contact message.
///
/// `id` is assigned by the store at creation time and is unique for the
/// lifetime of the store. Records are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Build the persisted record from a validated submission.
    pub fn from_validated(id: u64, contact: ValidatedContact) -> Self {
        Self {
            id,
            name: contact.name,
            email: contact.email,
            subject: contact.subject,
            message: contact.message,
            created_at: Utc::now(),
        }
    }
}
