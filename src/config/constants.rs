//! Configuration constants.
//!
//! This module defines the defaults used when no CLI flag or environment
//! variable overrides them.

/// Per-call timeout for every outbound request, in seconds.
///
/// Applies to DoH lookups, HEAD probes and range-list fetches alike. A call
/// that exceeds it is treated the same as a failed call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Public DNS-over-HTTPS JSON resolver.
pub const DEFAULT_DOH_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

/// Media type requested from the DoH resolver (`ct` parameter and `Accept` header).
pub const DOH_CONTENT_TYPE: &str = "application/dns-json";

/// DNS record type code for A records.
pub const DNS_TYPE_A: u16 = 1;
/// DNS record type code for NS records.
pub const DNS_TYPE_NS: u16 = 2;

/// Default listen address for `serve`.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
/// Default listen port for `serve`.
pub const DEFAULT_PORT: u16 = 8787;

/// Default User-Agent string for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("cdn_inference/", env!("CARGO_PKG_VERSION"));

/// Maximum length of an error message recorded in a probe result.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

/// Error body returned when no domain could be extracted from a request.
pub const MISSING_DOMAIN_MESSAGE: &str = "Missing domain";
