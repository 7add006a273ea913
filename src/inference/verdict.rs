//! Verdict aggregation.
//!
//! Pure functions over already-gathered evidence. Provider-name matching is a
//! plain substring test, so a nameserver or `server` header that merely
//! mentions the provider's name counts as evidence.

use crate::config::{ProviderProfile, HEADER_SERVER};
use crate::probe::ProbeResult;
use crate::ranges::ipv4_in_ranges;

use super::types::Verdict;

/// Whether any nameserver belongs to the provider.
///
/// Names are compared lowercase with any trailing `.` removed.
pub fn ns_uses_provider<S: AsRef<str>>(nameservers: &[S], provider: &ProviderProfile) -> bool {
    nameservers.iter().any(|ns| {
        let ns = ns.as_ref().trim_end_matches('.').to_lowercase();
        ns.ends_with(provider.nameserver_suffix) || ns.contains(provider.name)
    })
}

/// Header evidence in fixed order: `server`, ray id, cache status.
///
/// A failed probe carries no headers and yields no hints.
pub fn header_hints(probe: &ProbeResult, provider: &ProviderProfile) -> Vec<String> {
    let mut hints = Vec::new();

    if let Some(server) = probe.header(HEADER_SERVER) {
        if server.to_lowercase().contains(provider.name) {
            hints.push(format!("{}: {server}", HEADER_SERVER));
        }
    }
    if let Some(ray) = probe.header(provider.ray_header) {
        hints.push(format!("{}: {ray}", provider.ray_header));
    }
    if let Some(cache_status) = probe.header(provider.cache_status_header) {
        hints.push(format!("{}: {cache_status}", provider.cache_status_header));
    }

    hints
}

/// Resolved addresses that fall inside the provider's ranges, in input order.
pub fn ips_in_ranges<S: AsRef<str>>(ips: &[String], ranges: &[S]) -> Vec<String> {
    ips.iter()
        .filter(|ip| ipv4_in_ranges(ip, ranges))
        .cloned()
        .collect()
}

/// Combines all evidence into a verdict.
///
/// The provider is considered likely in use when any one signal fires; there
/// is no weighting.
pub fn aggregate<S: AsRef<str>>(
    resolved_ips: &[String],
    nameservers: &[String],
    probe: &ProbeResult,
    ranges: &[S],
    provider: &ProviderProfile,
) -> Verdict {
    let ns_using_provider = ns_uses_provider(nameservers, provider);
    let header_hints = header_hints(probe, provider);
    let ips_in_provider_ranges = ips_in_ranges(resolved_ips, ranges);

    let likely_using_provider =
        ns_using_provider || !header_hints.is_empty() || !ips_in_provider_ranges.is_empty();

    Verdict {
        header_hints,
        ips_in_provider_ranges,
        ns_using_provider,
        likely_using_provider,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CLOUDFLARE;
    use std::collections::BTreeMap;

    fn probe_with(headers: &[(&str, &str)]) -> ProbeResult {
        let headers: BTreeMap<String, String> = headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProbeResult::success(200, headers)
    }

    #[test]
    fn test_ns_match_is_case_and_dot_insensitive() {
        assert!(ns_uses_provider(&["NS.CLOUDFLARE.COM."], &CLOUDFLARE));
        assert!(ns_uses_provider(&["ns.cloudflare.com"], &CLOUDFLARE));
        assert!(ns_uses_provider(&["ns1.example.com", "Kate.NS.Cloudflare.com."], &CLOUDFLARE));
    }

    #[test]
    fn test_ns_substring_match_is_loose() {
        // Known false positive: any nameserver mentioning the provider's name
        assert!(ns_uses_provider(&["ns1.notcloudflare-dns.example"], &CLOUDFLARE));
    }

    #[test]
    fn test_ns_no_match() {
        assert!(!ns_uses_provider(&["ns1.example.com", "ns2.example.net."], &CLOUDFLARE));
        let empty: [&str; 0] = [];
        assert!(!ns_uses_provider(&empty, &CLOUDFLARE));
    }

    #[test]
    fn test_header_hints_order_is_fixed() {
        let probe = probe_with(&[
            ("cf-cache-status", "DYNAMIC"),
            ("cf-ray", "8a1b2c3d4e5f-AMS"),
            ("server", "cloudflare"),
        ]);
        assert_eq!(
            header_hints(&probe, &CLOUDFLARE),
            vec![
                "server: cloudflare",
                "cf-ray: 8a1b2c3d4e5f-AMS",
                "cf-cache-status: DYNAMIC"
            ]
        );
    }

    #[test]
    fn test_server_hint_requires_provider_name() {
        let probe = probe_with(&[("server", "nginx/1.25")]);
        assert!(header_hints(&probe, &CLOUDFLARE).is_empty());

        let probe = probe_with(&[("server", "Cloudflare")]);
        assert_eq!(header_hints(&probe, &CLOUDFLARE), vec!["server: Cloudflare"]);
    }

    #[test]
    fn test_failed_probe_has_no_hints() {
        assert!(header_hints(&ProbeResult::failure("refused"), &CLOUDFLARE).is_empty());
    }

    #[test]
    fn test_header_only_evidence_is_enough() {
        let probe = probe_with(&[("cf-ray", "8a1b2c3d4e5f-AMS")]);
        let verdict = aggregate(
            &["93.184.216.34".to_string()],
            &["a.iana-servers.net".to_string()],
            &probe,
            &["104.16.0.0/12"],
            &CLOUDFLARE,
        );
        assert!(!verdict.ns_using_provider);
        assert!(verdict.ips_in_provider_ranges.is_empty());
        assert_eq!(verdict.header_hints, vec!["cf-ray: 8a1b2c3d4e5f-AMS"]);
        assert!(verdict.likely_using_provider);
    }

    #[test]
    fn test_ip_only_evidence_is_enough() {
        let verdict = aggregate(
            &["104.16.1.1".to_string(), "8.8.8.8".to_string()],
            &[],
            &ProbeResult::failure("timeout"),
            &["104.16.0.0/12", "2606:4700::/32"],
            &CLOUDFLARE,
        );
        assert_eq!(verdict.ips_in_provider_ranges, vec!["104.16.1.1"]);
        assert!(verdict.likely_using_provider);
    }

    #[test]
    fn test_no_evidence() {
        let empty: [&str; 0] = [];
        let verdict = aggregate(&[], &[], &ProbeResult::failure("refused"), &empty, &CLOUDFLARE);
        assert_eq!(verdict, Verdict::default());
    }
}
