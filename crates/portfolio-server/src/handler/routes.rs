//! Route definitions for the portfolio server
//!
//! - POST /api/contact - contact-form intake
//! - GET /api/health - health check
//! - fallback - static client bundle, when a directory is configured
//!
//! Each contact request is handled once, synchronously: validate, then
//! persist, then respond. Validation failures never reach the store, and
//! no response claims success unless the record exists.

use std::path::Path;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, error, info};
use uuid::Uuid;

use portfolio_core::{validate_submission, ValidationError};

use super::{AppState, ComponentHealth, ContactResponse, HealthResponse, HealthStatus};

/// Terminal failure outcomes of a contact request.
#[derive(Debug)]
pub enum ApiError {
    /// One or more field constraints violated; the store was not invoked
    Validation(ValidationError),
    /// The request body was not parseable JSON
    UnparseableBody,
    /// The store could not complete the write (or an unclassified
    /// failure); reported generically, detail stays in logs
    Storage,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::validation_error(err.summary())),
            )
                .into_response(),
            ApiError::UnparseableBody => (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::validation_error(
                    "Request body must be valid JSON",
                )),
            )
                .into_response(),
            ApiError::Storage => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::storage_failure()),
            )
                .into_response(),
        }
    }
}

/// Create the router with all routes and layers.
///
/// When `static_dir` is set, unmatched paths fall through to the client
/// bundle with an `index.html` fallback for client-side routes; API
/// routes always take precedence.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/health", get(health_check))
        .with_state(state);

    if let Some(dir) = static_dir {
        let spa = ServeDir::new(dir).not_found_service(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(spa);
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// POST /api/contact - contact-form intake
///
/// Three terminal outcomes: accepted (201), rejected by validation (400,
/// with every violated field), storage failure (500, generic).
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let request_id = Uuid::new_v4();

    let Json(payload) = payload.map_err(|rejection| {
        debug!(%request_id, %rejection, "rejected unparseable contact body");
        ApiError::UnparseableBody
    })?;

    let contact = validate_submission(&payload).map_err(|err| {
        debug!(
            %request_id,
            violations = err.errors().len(),
            "contact submission failed validation"
        );
        ApiError::Validation(err)
    })?;

    let record = state.store.create_message(contact).await.map_err(|err| {
        error!(%request_id, error = %err, store = state.store.name(), "failed to persist contact message");
        ApiError::Storage
    })?;

    info!(%request_id, id = record.id, "contact message stored");
    Ok((StatusCode::CREATED, Json(ContactResponse::created())))
}

/// GET /api/health - health check
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_available = state.store.is_available().await;
    let status = if store_available {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    Json(HealthResponse {
        status,
        components: ComponentHealth {
            store: store_available,
        },
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
