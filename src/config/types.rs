//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::IpAddr;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_DOH_ENDPOINT, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use crate::config::provider::CLOUDFLARE;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use cdn_inference::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     doh_endpoint: "https://dns.google/resolve".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-call timeout in seconds for every outbound request
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// DNS-over-HTTPS JSON endpoint
    pub doh_endpoint: String,

    /// URL of the provider's published IPv4 ranges
    pub ipv4_ranges_url: String,

    /// URL of the provider's published IPv6 ranges
    pub ipv6_ranges_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            doh_endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            ipv4_ranges_url: CLOUDFLARE.ipv4_ranges_url.to_string(),
            ipv6_ranges_url: CLOUDFLARE.ipv6_ranges_url.to_string(),
        }
    }
}

/// Command-line options.
///
/// Every global option can also be set through its `CDN_INFERENCE_*`
/// environment variable (a `.env` file is honoured).
///
/// # Examples
///
/// ```bash
/// # One-shot check
/// cdn_inference check example.com
///
/// # Run the HTTP service on all interfaces
/// cdn_inference serve --bind 0.0.0.0 --port 8080
///
/// # Use a different resolver
/// CDN_INFERENCE_DOH_ENDPOINT=https://dns.google/resolve cdn_inference check example.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "cdn_inference",
    version,
    about = "Infers whether a domain is fronted by Cloudflare."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, env = "CDN_INFERENCE_LOG_LEVEL", default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, env = "CDN_INFERENCE_LOG_FORMAT", default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-call timeout in seconds (DoH lookups, probes, range lists)
    #[arg(long, global = true, env = "CDN_INFERENCE_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, env = "CDN_INFERENCE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long, global = true, env = "CDN_INFERENCE_DOH_ENDPOINT", default_value = DEFAULT_DOH_ENDPOINT)]
    pub doh_endpoint: String,

    /// URL of the provider's published IPv4 ranges
    #[arg(long, global = true, env = "CDN_INFERENCE_IPV4_RANGES_URL", default_value = CLOUDFLARE.ipv4_ranges_url)]
    pub ipv4_ranges_url: String,

    /// URL of the provider's published IPv6 ranges
    #[arg(long, global = true, env = "CDN_INFERENCE_IPV6_RANGES_URL", default_value = CLOUDFLARE.ipv6_ranges_url)]
    pub ipv6_ranges_url: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// What to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP inference service
    Serve {
        /// Address to listen on
        #[arg(long, env = "CDN_INFERENCE_BIND", default_value = DEFAULT_BIND_ADDRESS)]
        bind: IpAddr,

        /// Port to listen on
        #[arg(long, env = "CDN_INFERENCE_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Infer once for a single domain and print the JSON report
    Check {
        /// Domain to check
        domain: String,
    },
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent.clone(),
            doh_endpoint: opt.doh_endpoint.clone(),
            ipv4_ranges_url: opt.ipv4_ranges_url.clone(),
            ipv6_ranges_url: opt.ipv6_ranges_url.clone(),
        }
    }
}
