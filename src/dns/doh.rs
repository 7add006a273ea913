//! DoH JSON client.

use log::{debug, warn};
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::config::{DNS_TYPE_A, DNS_TYPE_NS, DOH_CONTENT_TYPE};
use crate::error_handling::{ErrorType, ServiceStats};

/// Record types queried by the inference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// IPv4 address records
    A,
    /// Authoritative nameserver records
    Ns,
}

impl RecordType {
    /// Mnemonic sent as the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Ns => "NS",
        }
    }

    /// Numeric type code used in answer records.
    pub fn code(self) -> u16 {
        match self {
            RecordType::A => DNS_TYPE_A,
            RecordType::Ns => DNS_TYPE_NS,
        }
    }
}

/// One record of a DoH JSON answer section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DohAnswer {
    /// Numeric record type (1 = A, 2 = NS, 5 = CNAME, ...)
    #[serde(rename = "type")]
    pub record_type: u16,
    /// Record data as text
    pub data: String,
}

/// The subset of a DoH JSON response the engine reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DohResponse {
    /// Answer section; absent when the name has no records of that type
    #[serde(rename = "Answer", default)]
    pub answer: Option<Vec<DohAnswer>>,
}

/// Resolves `name` for `record_type` through a DoH JSON endpoint.
///
/// Sends `GET <endpoint>?name=<name>&type=<type>&ct=application/dns-json`.
///
/// # Returns
///
/// - `None` if the request fails, times out, returns a non-success status, or
///   the body is not valid DoH JSON
/// - `Some(answers)` otherwise; a response without an `Answer` field yields an
///   empty vector
pub async fn resolve(
    client: &reqwest::Client,
    endpoint: &str,
    name: &str,
    record_type: RecordType,
    stats: &ServiceStats,
) -> Option<Vec<DohAnswer>> {
    let response = match client
        .get(endpoint)
        .query(&[
            ("name", name),
            ("type", record_type.as_str()),
            ("ct", DOH_CONTENT_TYPE),
        ])
        .header(ACCEPT, DOH_CONTENT_TYPE)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!(
                "DoH {} lookup for {name} failed: {}",
                record_type.as_str(),
                crate::error_handling::describe_reqwest_error(&e)
            );
            stats.increment_error(ErrorType::DohRequestError);
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!(
            "DoH {} lookup for {name} returned HTTP {}",
            record_type.as_str(),
            status.as_u16()
        );
        stats.increment_error(ErrorType::DohStatusError);
        return None;
    }

    match response.json::<DohResponse>().await {
        Ok(body) => {
            let answers = body.answer.unwrap_or_default();
            debug!(
                "DoH {} lookup for {name}: {} answer(s)",
                record_type.as_str(),
                answers.len()
            );
            Some(answers)
        }
        Err(e) => {
            warn!(
                "DoH {} response for {name} could not be decoded: {e}",
                record_type.as_str()
            );
            stats.increment_error(ErrorType::DohDecodeError);
            None
        }
    }
}
