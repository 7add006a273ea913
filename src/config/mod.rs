//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, defaults)
//! - HTTP header name constants and the probe allow-list
//! - The provider profile used by the verdict heuristics
//! - CLI option types and parsing

mod constants;
mod headers;
mod provider;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use provider::{ProviderProfile, CLOUDFLARE};
pub use types::{Command, Config, LogFormat, LogLevel, Opt};
