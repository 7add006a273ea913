//! The inference engine.
//!
//! For one domain the engine fans out four independent lookups (A records,
//! NS records, the HEAD probe chain, the provider range lists), waits for all
//! of them, and aggregates the evidence into an `InferenceReport`.

mod types;
mod verdict;

use std::sync::Arc;

use log::info;

use crate::config::{Config, ProviderProfile, CLOUDFLARE};
use crate::dns::{extract_ipv4_addresses, extract_nameservers, resolve, RecordType};
use crate::domain::normalize_domain;
use crate::error_handling::{ErrorType, InfoType, InitializationError, InputError, ServiceStats};
use crate::initialization::{init_client, init_probe_client};
use crate::probe::probe_with_fallback;
use crate::ranges::fetch_provider_ranges;

pub use types::{InferenceReport, Verdict};
pub use verdict::aggregate;

/// Shared, read-only resources for running inferences.
///
/// Cheap to share behind an `Arc`; nothing in here changes after construction
/// except the atomic counters in `ServiceStats`.
pub struct InferenceEngine {
    client: Arc<reqwest::Client>,
    probe_client: Arc<reqwest::Client>,
    doh_endpoint: String,
    ipv4_ranges_url: String,
    ipv6_ranges_url: String,
    provider: ProviderProfile,
    stats: Arc<ServiceStats>,
}

impl InferenceEngine {
    /// Builds an engine for Cloudflare with fresh statistics.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if an HTTP client cannot
    /// be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Self::with_stats(config, Arc::new(ServiceStats::new()))
    }

    /// Builds an engine that records into an existing statistics tracker.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if an HTTP client cannot
    /// be built.
    pub fn with_stats(
        config: &Config,
        stats: Arc<ServiceStats>,
    ) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
            probe_client: init_probe_client(config)?,
            doh_endpoint: config.doh_endpoint.clone(),
            ipv4_ranges_url: config.ipv4_ranges_url.clone(),
            ipv6_ranges_url: config.ipv6_ranges_url.clone(),
            provider: CLOUDFLARE,
            stats,
        })
    }

    /// Statistics recorded by this engine.
    pub fn stats(&self) -> &Arc<ServiceStats> {
        &self.stats
    }

    /// Runs one inference.
    ///
    /// `raw_domain` is trimmed and lowercased before use. Lookup failures never
    /// surface here; they only empty the affected part of the report.
    ///
    /// # Errors
    ///
    /// Returns `InputError::MissingDomain` if the domain is empty after
    /// trimming.
    pub async fn infer(&self, raw_domain: &str) -> Result<InferenceReport, InputError> {
        let Some(domain) = normalize_domain(raw_domain) else {
            self.stats.increment_error(ErrorType::MissingDomain);
            return Err(InputError::MissingDomain);
        };

        let (a_answers, ns_answers, probes, ranges) = tokio::join!(
            resolve(
                &self.client,
                &self.doh_endpoint,
                &domain,
                RecordType::A,
                &self.stats
            ),
            resolve(
                &self.client,
                &self.doh_endpoint,
                &domain,
                RecordType::Ns,
                &self.stats
            ),
            probe_with_fallback(&self.probe_client, &domain, &self.stats),
            fetch_provider_ranges(
                &self.client,
                &self.ipv4_ranges_url,
                &self.ipv6_ranges_url,
                &self.stats
            ),
        );

        let resolved_ips = extract_ipv4_addresses(a_answers.as_deref());
        let nameservers = extract_nameservers(ns_answers.as_deref());
        let verdict = aggregate(
            &resolved_ips,
            &nameservers,
            probes.effective(),
            ranges.as_slice(),
            &self.provider,
        );

        info!(
            "{domain}: likely_using_{}={} (ns={}, hints={}, ips_in_ranges={})",
            self.provider.name,
            verdict.likely_using_provider,
            verdict.ns_using_provider,
            verdict.header_hints.len(),
            verdict.ips_in_provider_ranges.len()
        );

        self.stats.increment_info(InfoType::InferenceCompleted);
        if verdict.likely_using_provider {
            self.stats.increment_info(InfoType::LikelyProvider);
        }

        Ok(InferenceReport::new(
            domain,
            resolved_ips,
            nameservers,
            verdict,
        ))
    }
}
