//! Request input extraction.

use serde_json::Value;

/// Finds the raw domain in a request.
///
/// The `domain` query parameter wins when present and non-empty. Otherwise the
/// body is parsed as JSON and its string `domain` field is used; an unparsable
/// body or a non-string field counts as absent. The value is returned as sent;
/// normalization happens in the engine.
pub fn extract_domain(query: Option<&str>, body: &[u8]) -> Option<String> {
    let from_query = query.and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "domain")
            .map(|(_, value)| value.into_owned())
    });

    match from_query {
        Some(domain) if !domain.is_empty() => Some(domain),
        _ => domain_from_body(body),
    }
}

fn domain_from_body(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("domain")?.as_str().map(str::to_string)
}
