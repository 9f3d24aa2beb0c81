//! HTTP handler infrastructure for the contact-intake API
//!
//! Organized into:
//! - `routes`: router construction and the request handlers
//!
//! plus the response types shared across handlers. The wire contract for
//! `POST /api/contact` is fixed:
//!
//! - `201 {"success":true,"message":"Message sent successfully"}`
//! - `400 {"success":false,"message":"Validation error","errors":"..."}`
//! - `500 {"success":false,"message":"Failed to send message"}`
//!
//! A success response implies the record exists; any non-success response
//! implies no record was created.

pub mod routes;

pub use routes::{create_router, health_check, submit_contact, ApiError};

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use portfolio_storage::MessageStore;

/// Shared state injected into every handler.
///
/// Built once in `main`; the store behind the `Arc` is the process-wide
/// persistence resource with explicit lifecycle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }
}

/// Response body for the contact endpoint, all three outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Whether the message was accepted and persisted
    pub success: bool,
    /// Human-readable acknowledgment or failure description
    pub message: String,
    /// Joined field-violation summary (validation failures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl ContactResponse {
    /// The 201 acknowledgment.
    pub fn created() -> Self {
        Self {
            success: true,
            message: "Message sent successfully".to_string(),
            errors: None,
        }
    }

    /// The 400 body carrying the field-violation summary.
    pub fn validation_error(errors: impl Into<String>) -> Self {
        Self {
            success: false,
            message: "Validation error".to_string(),
            errors: Some(errors.into()),
        }
    }

    /// The 500 body. Deliberately generic; internal causes stay in logs.
    pub fn storage_failure() -> Self {
        Self {
            success: false,
            message: "Failed to send message".to_string(),
            errors: None,
        }
    }
}

/// Health status of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Component availability breakdown for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub store: bool,
}

/// Response body for `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub components: ComponentHealth,
    pub uptime_seconds: u64,
    pub timestamp: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_body_matches_wire_contract() {
        let json = serde_json::to_value(ContactResponse::created()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "message": "Message sent successfully"
            })
        );
    }

    #[test]
    fn validation_body_carries_errors() {
        let json =
            serde_json::to_value(ContactResponse::validation_error("Name is required")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Validation error");
        assert_eq!(json["errors"], "Name is required");
    }

    #[test]
    fn storage_failure_body_omits_errors_field() {
        let json = serde_json::to_value(ContactResponse::storage_failure()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "message": "Failed to send message"
            })
        );
    }
}
