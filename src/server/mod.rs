//! HTTP inference service.
//!
//! Provides two endpoints:
//! - `/` - runs one inference; `GET ?domain=<d>` or `POST {"domain": "<d>"}`
//! - `/status` - JSON counters for the running process

mod handlers;
mod input;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::get;
use axum::Router;

use crate::inference::InferenceEngine;
use handlers::{infer_handler, status_handler};
use types::AppState;

pub use types::{ErrorBody, ErrorCounts, StatusResponse};

/// Builds the service router around an engine.
pub fn build_router(engine: Arc<InferenceEngine>) -> Router {
    let state = AppState {
        engine,
        start_time: Arc::new(Instant::now()),
    };

    Router::new()
        .route("/", get(infer_handler).post(infer_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Binds `addr` and serves until the process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn start_server(addr: SocketAddr, engine: Arc<InferenceEngine>) -> Result<(), anyhow::Error> {
    let app = build_router(engine);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind inference server to {}: {}", addr, e))?;

    log::info!("Inference server listening on http://{}/", addr);
    log::info!("  - Inference: http://{}/?domain=<domain>", addr);
    log::info!("  - Status: http://{}/status", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Inference server error: {}", e))?;

    Ok(())
}
