//! Error type definitions.
//!
//! This module defines all error and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::MISSING_DOMAIN_MESSAGE;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// The request did not carry a usable domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Domain absent, or empty after trimming.
    #[error("{}", MISSING_DOMAIN_MESSAGE)]
    MissingDomain,
}

/// Failure fetching a plain-text or JSON document over HTTP.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, timeout, or undecodable body.
    #[error("request to {url} failed: {source}")]
    Request {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// Status code returned
        status: u16,
    },
}

/// Error parsing a CIDR block or an IPv4 address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// Not a dotted-quad IPv4 address (non-numeric or out-of-range octet).
    #[error("invalid IPv4 address '{0}'")]
    InvalidAddress(String),

    /// Prefix length is non-numeric or greater than 32.
    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),

    /// IPv6 blocks are never tested.
    #[error("IPv6 range '{0}' is not supported")]
    Ipv6Unsupported(String),
}

/// Types of soft failures that can occur while gathering evidence.
///
/// None of these abort a request; they are counted for `/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Input
    /// No domain in the request
    MissingDomain,
    // DoH resolver
    /// Resolver unreachable or timed out
    DohRequestError,
    /// Resolver answered with a non-success status
    DohStatusError,
    /// Resolver body was not DoH JSON
    DohDecodeError,
    // HEAD probes
    /// HTTPS probe failed
    ProbeHttpsError,
    /// HTTP fallback probe failed
    ProbeHttpError,
    // Provider range lists
    /// Range list unreachable or timed out
    RangeFetchError,
    /// Range list answered with a non-success status
    RangeStatusError,
}

/// Types of informational metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A report was produced
    InferenceCompleted,
    /// The report concluded the provider is likely in use
    LikelyProvider,
    /// The HTTPS probe failed and plain HTTP was tried
    HttpFallback,
}
