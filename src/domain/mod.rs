//! Domain normalization.

/// Normalizes a user-supplied domain (trim, lowercase).
///
/// Returns `None` when nothing is left after trimming. No other validation is
/// done; a malformed name simply produces empty lookups downstream.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let domain = raw.trim().to_lowercase();
    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}
