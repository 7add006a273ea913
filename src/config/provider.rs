//! CDN provider profile.

use super::headers::{HEADER_CF_CACHE_STATUS, HEADER_CF_RAY};

/// Static description of the provider being detected.
///
/// The verdict heuristics only ever look at these fields, so everything that is
/// provider-specific lives here rather than in the aggregation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderProfile {
    /// Lowercase provider name, matched as a substring against nameservers and
    /// the `server` header.
    pub name: &'static str,
    /// Suffix shared by the provider's authoritative nameservers.
    pub nameserver_suffix: &'static str,
    /// Header carrying the provider's per-request ray identifier.
    pub ray_header: &'static str,
    /// Header carrying the provider's edge cache status.
    pub cache_status_header: &'static str,
    /// Published IPv4 ranges, one CIDR block per line.
    pub ipv4_ranges_url: &'static str,
    /// Published IPv6 ranges, one CIDR block per line.
    pub ipv6_ranges_url: &'static str,
}

/// Cloudflare.
pub const CLOUDFLARE: ProviderProfile = ProviderProfile {
    name: "cloudflare",
    nameserver_suffix: "ns.cloudflare.com",
    ray_header: HEADER_CF_RAY,
    cache_status_header: HEADER_CF_CACHE_STATUS,
    ipv4_ranges_url: "https://www.cloudflare.com/ips-v4",
    ipv6_ranges_url: "https://www.cloudflare.com/ips-v6",
};
