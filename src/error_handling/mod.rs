//! Error handling and service statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, fetching and CIDR parsing
//! - Failure categories counted per soft failure
//! - Service statistics tracking (errors and info metrics)
//! - Human-readable descriptions of `reqwest` failures
//!
//! Only input errors are surfaced to callers. Every other failure is soft: it
//! is logged, counted, and the affected evidence is treated as empty.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::describe_reqwest_error;
pub use stats::ServiceStats;
pub use types::{CidrError, ErrorType, FetchError, InfoType, InitializationError, InputError};
