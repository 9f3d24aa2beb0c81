//! Portfolio server binary
//!
//! Starts the contact-intake API and, when configured, static hosting of
//! the client bundle. The message store is opened once here and injected
//! into the handlers; it is flushed and closed when the process exits.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use portfolio_server::{create_router, AppState, ServerConfig};
use portfolio_storage::{MemoryMessageStore, MessageStore, SledMessageStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::parse();

    let store: Arc<dyn MessageStore> = if config.ephemeral {
        info!("using in-memory message store; messages will not survive restart");
        Arc::new(MemoryMessageStore::new())
    } else {
        let store = SledMessageStore::open(&config.data_dir).with_context(|| {
            format!("opening message store at {}", config.data_dir.display())
        })?;
        Arc::new(store)
    };
    info!(store = store.name(), "message store ready");

    let state = AppState::new(store);
    let app = create_router(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding to {}", config.bind))?;
    info!(addr = %config.bind, "portfolio server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("portfolio server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => error!(error = %err, "failed to listen for shutdown signal"),
    }
}
