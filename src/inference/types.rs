//! Inference report types.

use serde::{Deserialize, Serialize};

/// Aggregated verdict derived from all gathered evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Human-readable header evidence, in fixed check order
    pub header_hints: Vec<String>,
    /// Resolved IPv4 addresses inside the provider's published ranges
    pub ips_in_provider_ranges: Vec<String>,
    /// A nameserver looks like one of the provider's
    pub ns_using_provider: bool,
    /// Any of the three signals fired
    pub likely_using_provider: bool,
}

/// The report returned for one domain.
///
/// Field names and order are part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceReport {
    /// Normalized input domain
    pub domain: String,
    /// IPv4 addresses from the A lookup
    pub resolved_ips: Vec<String>,
    /// Nameservers from the NS lookup, lowercase, no trailing dot
    pub nameservers: Vec<String>,
    /// Header evidence
    #[serde(rename = "headerHints")]
    pub header_hints: Vec<String>,
    /// Resolved addresses inside the provider's ranges
    #[serde(rename = "ips_in_cloudflare_ranges")]
    pub ips_in_provider_ranges: Vec<String>,
    /// Nameserver evidence
    #[serde(rename = "ns_using_cloudflare")]
    pub ns_using_provider: bool,
    /// Overall verdict
    #[serde(rename = "likely_using_cloudflare")]
    pub likely_using_provider: bool,
}

impl InferenceReport {
    /// Assembles a report from the lookups and the verdict computed over them.
    pub fn new(
        domain: String,
        resolved_ips: Vec<String>,
        nameservers: Vec<String>,
        verdict: Verdict,
    ) -> Self {
        Self {
            domain,
            resolved_ips,
            nameservers,
            header_hints: verdict.header_hints,
            ips_in_provider_ranges: verdict.ips_in_provider_ranges,
            ns_using_provider: verdict.ns_using_provider,
            likely_using_provider: verdict.likely_using_provider,
        }
    }

    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
