//! Error description helpers.

use crate::config::MAX_ERROR_MESSAGE_LENGTH;

/// Describes a `reqwest::Error` including its source chain.
///
/// `reqwest` errors only print the outermost context ("error sending request
/// for url ..."), which hides whether DNS, TLS or the TCP connect failed. The
/// source chain is appended so the probe result says what actually happened.
/// Control characters are dropped and the result is capped at
/// `MAX_ERROR_MESSAGE_LENGTH` characters.
pub fn describe_reqwest_error(error: &reqwest::Error) -> String {
    let mut message = if error.is_timeout() {
        format!("timeout: {error}")
    } else {
        error.to_string()
    };

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        if !message.contains(&cause_msg) {
            message.push_str(": ");
            message.push_str(&cause_msg);
        }
        source = cause.source();
    }

    let sanitized: String = message.chars().filter(|c| !c.is_control()).collect();
    if sanitized.chars().count() > MAX_ERROR_MESSAGE_LENGTH {
        sanitized.chars().take(MAX_ERROR_MESSAGE_LENGTH).collect()
    } else {
        sanitized
    }
}
