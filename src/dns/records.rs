//! Extraction of evidence from DoH answer sets.

use super::doh::{DohAnswer, RecordType};

/// Extracts IPv4 addresses from an A-record answer set.
///
/// Only records with type code 1 are kept; CNAME hops and anything else the
/// resolver includes in the answer section are skipped. An absent answer set
/// yields an empty list.
pub fn extract_ipv4_addresses(answers: Option<&[DohAnswer]>) -> Vec<String> {
    answers
        .unwrap_or_default()
        .iter()
        .filter(|answer| answer.record_type == RecordType::A.code())
        .map(|answer| answer.data.clone())
        .collect()
}

/// Extracts nameserver hostnames from an NS-record answer set.
///
/// Names are lowercased and a trailing root `.` is stripped.
pub fn extract_nameservers(answers: Option<&[DohAnswer]>) -> Vec<String> {
    answers
        .unwrap_or_default()
        .iter()
        .filter(|answer| answer.record_type == RecordType::Ns.code())
        .map(|answer| {
            answer
                .data
                .trim_end_matches('.')
                .to_lowercase()
        })
        .collect()
}
