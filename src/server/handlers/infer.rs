//! Inference handler.

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
};

use super::super::input::extract_domain;
use super::super::types::{AppState, ErrorBody};
use super::json_response;
use crate::error_handling::InputError;

/// Runs one inference for the domain in the query string or JSON body.
///
/// Always answers 200 with a report unless the domain is missing, in which
/// case it answers 400 with `{"error": "Missing domain"}`.
pub async fn infer_handler(State(state): State<AppState>, uri: Uri, body: Bytes) -> Response {
    let raw_domain = extract_domain(uri.query(), &body).unwrap_or_default();

    match state.engine.infer(&raw_domain).await {
        Ok(report) => json_response(StatusCode::OK, &report),
        Err(InputError::MissingDomain) => {
            log::debug!("Rejected request to {} without a domain", uri.path());
            json_response(StatusCode::BAD_REQUEST, &ErrorBody::missing_domain())
        }
    }
}
