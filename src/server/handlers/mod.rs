//! Inference server HTTP handlers.

mod infer;
mod status;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub use infer::infer_handler;
pub use status::status_handler;

/// Serializes `body` as pretty-printed JSON with the given status.
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string_pretty(body) {
        Ok(json) => (status, [(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => {
            log::error!("Failed to serialize response body: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "serialization error").into_response()
        }
    }
}
