//! HTTP header name constants.
//!
//! Header names are lowercase because `reqwest::header::HeaderMap` lookups are
//! case-insensitive and the probe result reports them in lowercase.

// Infrastructure/Server identification
/// Server header (identifies server software)
pub const HEADER_SERVER: &str = "server";
/// X-Powered-By header (identifies server framework)
pub const HEADER_X_POWERED_BY: &str = "x-powered-by";

// CDN/Proxy identification
/// CF-Ray header (Cloudflare request ID)
pub const HEADER_CF_RAY: &str = "cf-ray";
/// CF-Cache-Status header (Cloudflare edge cache result)
pub const HEADER_CF_CACHE_STATUS: &str = "cf-cache-status";
/// Via header (proxy chain information)
pub const HEADER_VIA: &str = "via";

/// Headers kept from a HEAD probe response.
///
/// Anything else the origin returns is dropped. A header is only recorded
/// when the origin actually sent it.
pub const PROBE_HEADERS: &[&str] = &[
    HEADER_SERVER,
    HEADER_CF_RAY,
    HEADER_CF_CACHE_STATUS,
    HEADER_VIA,
    HEADER_X_POWERED_BY,
];
