//! DNS resolution over a DNS-over-HTTPS JSON API.
//!
//! This module provides:
//! - A/NS lookups against a DoH JSON endpoint (`resolve`)
//! - Extraction of IPv4 addresses and nameserver names from answer sets
//!
//! Lookups never fail the caller: an unreachable resolver, a non-success
//! status or an undecodable body all yield `None`, which callers treat as an
//! empty answer set.

mod doh;
mod records;

// Re-export public API
pub use doh::{resolve, DohAnswer, RecordType};
pub use records::{extract_ipv4_addresses, extract_nameservers};
