//! Inference server data structures.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::MISSING_DOMAIN_MESSAGE;
use crate::inference::InferenceEngine;

/// Shared state for the inference server
#[derive(Clone)]
pub struct AppState {
    /// Engine used by every request
    pub engine: Arc<InferenceEngine>,
    /// When the router was built
    pub start_time: Arc<Instant>,
}

/// Structured error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message
    pub error: String,
}

impl ErrorBody {
    /// Body for a request without a usable domain.
    pub fn missing_domain() -> Self {
        Self {
            error: MISSING_DOMAIN_MESSAGE.to_string(),
        }
    }
}

/// JSON response for `/status` endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Reports produced
    pub inferences_completed: usize,
    /// Reports whose verdict was positive
    pub likely_provider: usize,
    /// Reports concluding the provider is not in use
    pub unlikely_provider: usize,
    /// Requests rejected for lack of a domain
    pub missing_domain: usize,
    /// Probes that fell back to plain HTTP
    pub http_fallbacks: usize,
    /// Seconds since the server started
    pub uptime_seconds: f64,
    /// Soft failures by kind
    pub errors: ErrorCounts,
}

/// Soft failure counters
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorCounts {
    /// All failures, input errors included
    pub total: usize,
    /// DoH transport failures and timeouts
    pub doh_request: usize,
    /// DoH non-success responses
    pub doh_status: usize,
    /// DoH bodies that were not valid JSON
    pub doh_decode: usize,
    /// Failed HTTPS probes
    pub probe_https: usize,
    /// Failed HTTP fallback probes
    pub probe_http: usize,
    /// Range-list transport failures and timeouts
    pub range_fetch: usize,
    /// Range-list non-success responses
    pub range_status: usize,
}
