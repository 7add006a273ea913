//! IPv4 CIDR containment.
//!
//! Addresses and prefixes are validated strictly: an octet outside 0-255, a
//! non-numeric segment, or a prefix above 32 is a `CidrError` and such a range
//! never matches. IPv6 blocks are recognised by a `:` and skipped.

use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;
use log::debug;

use crate::error_handling::CidrError;

/// Parses `network/prefix` into an IPv4 network.
///
/// A missing or empty prefix is read as `/0`, i.e. the block matches every
/// address. Host bits in the network address are allowed and ignored when
/// testing containment.
///
/// # Errors
///
/// - `CidrError::Ipv6Unsupported` if the entry contains `:`
/// - `CidrError::InvalidAddress` if the network is not a dotted quad
/// - `CidrError::InvalidPrefix` if the prefix is not a number in 0..=32
pub fn parse_ipv4_cidr(range: &str) -> Result<Ipv4Network, CidrError> {
    let range = range.trim();
    if range.contains(':') {
        return Err(CidrError::Ipv6Unsupported(range.to_string()));
    }

    let (network, prefix) = range.split_once('/').unwrap_or((range, ""));

    let network: Ipv4Addr = network
        .parse()
        .map_err(|_| CidrError::InvalidAddress(network.to_string()))?;

    let prefix: u8 = if prefix.is_empty() {
        0
    } else {
        prefix
            .parse()
            .map_err(|_| CidrError::InvalidPrefix(prefix.to_string()))?
    };

    Ipv4Network::new(network, prefix).map_err(|_| CidrError::InvalidPrefix(prefix.to_string()))
}

/// Returns whether `ip` falls inside at least one IPv4 block of `ranges`.
///
/// IPv6 blocks and malformed blocks never match. A malformed `ip` matches
/// nothing.
pub fn ipv4_in_ranges<S: AsRef<str>>(ip: &str, ranges: &[S]) -> bool {
    let Ok(candidate) = ip.trim().parse::<Ipv4Addr>() else {
        debug!("Skipping containment check for non-IPv4 address {ip}");
        return false;
    };

    ranges.iter().any(|range| match parse_ipv4_cidr(range.as_ref()) {
        Ok(network) => network.contains(candidate),
        Err(CidrError::Ipv6Unsupported(_)) => false,
        Err(e) => {
            debug!("Ignoring malformed provider range: {e}");
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_host_route_contains_itself() {
        for ip in ["1.2.3.4", "104.16.1.1", "0.0.0.0", "255.255.255.255"] {
            assert!(ipv4_in_ranges(ip, &[format!("{ip}/32")]), "{ip} in {ip}/32");
        }
    }

    #[test]
    fn test_default_route_contains_everything() {
        for ip in ["1.2.3.4", "104.16.1.1", "0.0.0.0", "255.255.255.255"] {
            assert!(ipv4_in_ranges(ip, &["0.0.0.0/0"]));
        }
    }

    #[test]
    fn test_ipv6_ranges_never_match() {
        let ranges = ["2400:cb00::/32", "::/0", "::ffff:104.16.0.0/108"];
        assert!(!ipv4_in_ranges("104.16.1.1", &ranges));
        assert!(!ipv4_in_ranges("0.0.0.0", &ranges));
    }

    #[test]
    fn test_prefix_boundaries() {
        let ranges = ["104.16.0.0/12"];
        assert!(ipv4_in_ranges("104.16.0.0", &ranges));
        assert!(ipv4_in_ranges("104.16.1.1", &ranges));
        assert!(ipv4_in_ranges("104.31.255.255", &ranges));
        assert!(!ipv4_in_ranges("104.32.0.0", &ranges));
        assert!(!ipv4_in_ranges("104.15.255.255", &ranges));
    }

    #[test]
    fn test_any_range_may_match() {
        let ranges = ["173.245.48.0/20", "2606:4700::/32", "198.41.128.0/17"];
        assert!(ipv4_in_ranges("198.41.200.7", &ranges));
        assert!(!ipv4_in_ranges("8.8.8.8", &ranges));
    }

    #[test]
    fn test_host_bits_in_network_are_ignored() {
        assert!(ipv4_in_ranges("10.1.2.3", &["10.1.99.99/16"]));
    }

    #[test]
    fn test_empty_or_missing_prefix_is_default_route() {
        assert!(ipv4_in_ranges("8.8.8.8", &["1.1.1.1/"]));
        assert!(ipv4_in_ranges("8.8.8.8", &["1.1.1.1"]));
    }

    #[test]
    fn test_malformed_ranges_rejected() {
        assert_eq!(
            parse_ipv4_cidr("256.1.1.1/8"),
            Err(CidrError::InvalidAddress("256.1.1.1".to_string()))
        );
        assert_eq!(
            parse_ipv4_cidr("10.0.0.0/33"),
            Err(CidrError::InvalidPrefix("33".to_string()))
        );
        assert_eq!(
            parse_ipv4_cidr("10.0.0.0/abc"),
            Err(CidrError::InvalidPrefix("abc".to_string()))
        );
        assert!(matches!(
            parse_ipv4_cidr("a.b.c.d/8"),
            Err(CidrError::InvalidAddress(_))
        ));
        assert!(matches!(
            parse_ipv4_cidr("2400:cb00::/32"),
            Err(CidrError::Ipv6Unsupported(_))
        ));
        assert!(!ipv4_in_ranges("10.1.1.1", &["256.1.1.1/0", "10.0.0.0/99"]));
    }

    #[test]
    fn test_malformed_candidate_matches_nothing() {
        assert!(!ipv4_in_ranges("not-an-ip", &["0.0.0.0/0"]));
        assert!(!ipv4_in_ranges("2606:4700::1111", &["0.0.0.0/0"]));
    }

    #[test]
    fn test_no_ranges() {
        let empty: [&str; 0] = [];
        assert!(!ipv4_in_ranges("104.16.1.1", &empty));
    }

    proptest! {
        #[test]
        fn test_any_address_in_own_host_route_and_default_route(raw in any::<u32>()) {
            let ip = Ipv4Addr::from(raw).to_string();
            let host_route = format!("{}/32", ip);
            prop_assert!(ipv4_in_ranges(&ip, &[host_route]));
            prop_assert!(ipv4_in_ranges(&ip, &["0.0.0.0/0"]));
        }

        #[test]
        fn test_any_range_with_colon_never_matches(
            raw in any::<u32>(),
            head in "\\PC{0,16}",
            tail in "\\PC{0,16}"
        ) {
            let ip = Ipv4Addr::from(raw).to_string();
            let range = format!("{head}:{tail}");
            prop_assert!(!ipv4_in_ranges(&ip, &[range.as_str()]));
            prop_assert!(
                matches!(parse_ipv4_cidr(&range), Err(CidrError::Ipv6Unsupported(_))),
                "expected IPv6 rejection for {:?}",
                range
            );
        }
    }
}
