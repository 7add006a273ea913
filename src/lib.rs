//! cdn_inference library: infer whether a domain is fronted by Cloudflare
//!
//! Evidence is gathered from public signals only:
//! - A and NS records, resolved through a DNS-over-HTTPS JSON endpoint
//! - response headers of an HTTP HEAD probe (HTTPS, then plain HTTP)
//! - the provider's published IPv4 ranges
//!
//! and combined into an [`InferenceReport`]. Every lookup is best-effort: a
//! failed lookup empties its part of the report instead of failing the request.
//!
//! # Example
//!
//! ```no_run
//! use cdn_inference::{Config, InferenceEngine};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = InferenceEngine::new(&Config::default())?;
//! let report = engine.infer("example.com").await?;
//! println!("{}", report.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod domain;
mod error_handling;
mod inference;
pub mod initialization;
mod probe;
mod ranges;
mod server;

// Re-export public API
pub use config::{Command, Config, LogFormat, LogLevel, Opt, ProviderProfile, CLOUDFLARE};
pub use dns::{DohAnswer, RecordType};
pub use domain::normalize_domain;
pub use error_handling::{
    CidrError, ErrorType, FetchError, InfoType, InitializationError, InputError, ServiceStats,
};
pub use inference::{InferenceEngine, InferenceReport, Verdict};
pub use probe::{ProbeOutcome, ProbeResult, Scheme};
pub use ranges::{ipv4_in_ranges, parse_ipv4_cidr, parse_range_lines};
pub use server::{build_router, start_server, ErrorBody, ErrorCounts, StatusResponse};
