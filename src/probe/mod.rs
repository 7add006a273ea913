//! HTTP HEAD probing of the target domain.
//!
//! A probe never fails the caller: transport errors are captured into the
//! returned `ProbeResult`. HTTPS is tried first and plain HTTP at most once
//! afterwards.

mod headers;

use std::collections::BTreeMap;

use log::debug;
use reqwest::header::CACHE_CONTROL;

use crate::error_handling::{describe_reqwest_error, ErrorType, InfoType, ServiceStats};

pub use headers::extract_probe_headers;

/// Transport used for a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// TLS
    Https,
    /// Plain text
    Http,
}

impl Scheme {
    /// URL scheme prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

/// Outcome of a single HEAD request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResult {
    /// A response was received (any status, including redirects)
    pub ok: bool,
    /// Response status code
    pub status: Option<u16>,
    /// Allow-listed response headers, lowercase names
    pub headers: Option<BTreeMap<String, String>>,
    /// Transport error description
    pub error: Option<String>,
}

impl ProbeResult {
    /// A probe that received a response.
    pub fn success(status: u16, headers: BTreeMap<String, String>) -> Self {
        Self {
            ok: true,
            status: Some(status),
            headers: Some(headers),
            error: None,
        }
    }

    /// A probe that failed before any response arrived.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Value of an allow-listed header, if the origin sent it.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|headers| headers.get(name))
            .map(String::as_str)
    }
}

/// Both probe attempts for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// The HTTPS attempt, always made
    pub https: ProbeResult,
    /// The HTTP attempt, made only when HTTPS failed
    pub http: Option<ProbeResult>,
}

impl ProbeOutcome {
    /// The attempt whose headers count as evidence.
    ///
    /// HTTPS when it succeeded, otherwise the HTTP fallback (which may itself
    /// have failed).
    pub fn effective(&self) -> &ProbeResult {
        match &self.http {
            Some(http) if !self.https.ok => http,
            _ => &self.https,
        }
    }
}

/// Sends one HEAD request to `scheme://domain`.
///
/// The `client` is expected to have redirects disabled (see
/// `init_probe_client`); a `Cache-Control: no-cache` header is sent so
/// intermediaries do not answer from cache.
pub async fn probe(client: &reqwest::Client, scheme: Scheme, domain: &str) -> ProbeResult {
    let url = format!("{}://{}", scheme.as_str(), domain);

    match client
        .head(&url)
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await
    {
        Ok(response) => {
            let status = response.status().as_u16();
            let headers = extract_probe_headers(response.headers());
            debug!("HEAD {url} -> {status} ({} allow-listed headers)", headers.len());
            ProbeResult::success(status, headers)
        }
        Err(e) => {
            let message = describe_reqwest_error(&e);
            debug!("HEAD {url} failed: {message}");
            ProbeResult::failure(message)
        }
    }
}

/// Probes over HTTPS, falling back to plain HTTP once if HTTPS failed.
pub async fn probe_with_fallback(
    client: &reqwest::Client,
    domain: &str,
    stats: &ServiceStats,
) -> ProbeOutcome {
    let https = probe(client, Scheme::Https, domain).await;
    if https.ok {
        return ProbeOutcome { https, http: None };
    }

    stats.increment_error(ErrorType::ProbeHttpsError);
    stats.increment_info(InfoType::HttpFallback);

    let http = probe(client, Scheme::Http, domain).await;
    if !http.ok {
        stats.increment_error(ErrorType::ProbeHttpError);
    }

    ProbeOutcome {
        https,
        http: Some(http),
    }
}
