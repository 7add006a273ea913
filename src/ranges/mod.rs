//! Provider IP range retrieval and containment testing.
//!
//! The provider publishes its IPv4 and IPv6 ranges as plain-text lists, one
//! CIDR block per line. Both lists are fetched on every request; nothing is
//! cached. A list that cannot be fetched contributes no ranges.

mod cidr;

use log::{debug, warn};

use crate::error_handling::{describe_reqwest_error, ErrorType, FetchError, ServiceStats};

pub use cidr::{ipv4_in_ranges, parse_ipv4_cidr};

/// Fetches one range list and returns its body.
///
/// # Errors
///
/// Returns `FetchError::Request` on transport failure or timeout, and
/// `FetchError::Status` on a non-success response.
pub async fn fetch_range_list(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })
}

/// Splits a range list into entries.
///
/// Accepts `\n`, `\r\n` and bare `\r` line endings. Lines are trimmed and
/// blank lines dropped; no other validation happens here.
pub fn parse_range_lines(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fetches both provider lists concurrently and concatenates them (IPv4 first).
///
/// A failed list is logged, counted, and treated as empty.
pub async fn fetch_provider_ranges(
    client: &reqwest::Client,
    ipv4_url: &str,
    ipv6_url: &str,
    stats: &ServiceStats,
) -> Vec<String> {
    let (ipv4, ipv6) = tokio::join!(
        fetch_range_list(client, ipv4_url),
        fetch_range_list(client, ipv6_url)
    );

    let mut ranges = Vec::new();
    for result in [ipv4, ipv6] {
        match result {
            Ok(text) => ranges.extend(parse_range_lines(&text)),
            Err(e) => {
                match &e {
                    FetchError::Request { url, source } => {
                        warn!(
                            "Failed to fetch provider ranges from {url}: {}",
                            describe_reqwest_error(source)
                        );
                        stats.increment_error(ErrorType::RangeFetchError);
                    }
                    FetchError::Status { .. } => {
                        warn!("Failed to fetch provider ranges: {e}");
                        stats.increment_error(ErrorType::RangeStatusError);
                    }
                }
            }
        }
    }

    debug!("Loaded {} provider range entries", ranges.len());
    ranges
}
