//! Core domain logic for the portfolio contact-intake service
//!
//! This crate holds everything the rest of the system agrees on:
//!
//! 1. **Message types** (`message`): the validated submission shape and
//!    the persisted [`ContactMessage`] record.
//! 2. **Validator** (`validator`): a pure function that checks an untyped
//!    JSON payload against the contact-form schema and reports every
//!    violated field, not just the first.
//! 3. **Errors** (`error`): the two-way error taxonomy — recoverable
//!    [`ValidationError`]s carrying field-level detail, and
//!    [`StorageError`]s for persistence failures.
//!
//! The crate is deliberately free of I/O and async: the validator is a
//! deterministic function of its input, which keeps it trivially testable
//! and reusable from any transport.

pub mod error;
pub mod message;
pub mod validator;

pub use error::{FieldError, StorageError, ValidationError};
pub use message::{ContactMessage, ValidatedContact};
pub use validator::validate_submission;
