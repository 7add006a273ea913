//! JSON status handler.

use axum::{extract::State, http::StatusCode, response::Response};

use super::super::types::{AppState, ErrorCounts, StatusResponse};
use super::json_response;
use crate::error_handling::{ErrorType, InfoType};

/// JSON status endpoint with request and failure counters
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let stats = state.engine.stats();

    let completed = stats.get_info_count(InfoType::InferenceCompleted);
    let likely = stats.get_info_count(InfoType::LikelyProvider);

    let response = StatusResponse {
        inferences_completed: completed,
        likely_provider: likely,
        unlikely_provider: completed.saturating_sub(likely),
        missing_domain: stats.get_error_count(ErrorType::MissingDomain),
        http_fallbacks: stats.get_info_count(InfoType::HttpFallback),
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        errors: ErrorCounts {
            total: stats.total_errors(),
            doh_request: stats.get_error_count(ErrorType::DohRequestError),
            doh_status: stats.get_error_count(ErrorType::DohStatusError),
            doh_decode: stats.get_error_count(ErrorType::DohDecodeError),
            probe_https: stats.get_error_count(ErrorType::ProbeHttpsError),
            probe_http: stats.get_error_count(ErrorType::ProbeHttpError),
            range_fetch: stats.get_error_count(ErrorType::RangeFetchError),
            range_status: stats.get_error_count(ErrorType::RangeStatusError),
        },
    };

    json_response(StatusCode::OK, &response)
}
