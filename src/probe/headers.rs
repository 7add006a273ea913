//! Allow-listed header extraction.

use std::collections::BTreeMap;

use reqwest::header::HeaderMap;

use crate::config::PROBE_HEADERS;

/// Extracts the probe allow-list from response headers.
///
/// Only headers the origin actually sent are included. Values that are not
/// valid visible ASCII are converted lossily rather than dropped, since a
/// `server` header with odd bytes is still evidence.
pub fn extract_probe_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    PROBE_HEADERS
        .iter()
        .filter_map(|&name| {
            headers.get(name).map(|value| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
        })
        .collect()
}
