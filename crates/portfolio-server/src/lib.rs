//! Portfolio site HTTP server
//!
//! One process hosts both halves of the site:
//!
//! - the contact-intake API (`POST /api/contact`, plus `GET /api/health`),
//!   wired through [`handler`];
//! - the static single-page client, served from a configurable directory
//!   with an `index.html` fallback for client-side routes.
//!
//! The message store is built once in `main` and injected into the
//! handlers through [`handler::AppState`]; nothing reaches persistence
//! except through that seam.

pub mod config;
pub mod handler;

pub use config::ServerConfig;
pub use handler::{create_router, AppState, ContactResponse, HealthResponse};
