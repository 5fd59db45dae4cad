//! High-level client: `PresyoClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::commodity::client::Commodities;
use crate::domain::market::client::Markets;
use crate::domain::price::client::Prices;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::domain::stats::client::Stats;
use crate::error::PresyoError;
use crate::http::PresyoHttp;
use crate::network::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

use std::time::Duration;
use tracing::debug;

// Re-export sub-client types for convenience.
pub use crate::domain::commodity::client::Commodities as CommoditiesClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::price::client::Prices as PricesClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;
pub use crate::domain::stats::client::Stats as StatsClient;

/// The primary entry point.
///
/// Provides nested sub-client accessors for each domain:
/// `client.commodities()`, `client.prices()`, etc. Cloning is cheap and
/// shares the connection pool.
#[derive(Clone)]
pub struct PresyoClient {
    pub(crate) http: PresyoHttp,
}

impl PresyoClient {
    pub fn builder() -> PresyoClientBuilder {
        PresyoClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn commodities(&self) -> Commodities<'_> {
        Commodities { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn stats(&self) -> Stats<'_> {
        Stats { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PresyoClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for PresyoClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PresyoClientBuilder {
    /// Builder seeded from `PRESYO_API_URL`, falling back to the default URL.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                builder.base_url = url.trim().to_string();
            }
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<PresyoClient, PresyoError> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(PresyoError::Config(format!(
                "Base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(PresyoError::Config("Request timeout must be non-zero".to_string()));
        }
        debug!(base_url = url, timeout_ms = self.timeout.as_millis() as u64, "building client");
        Ok(PresyoClient {
            http: PresyoHttp::new(url, self.timeout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = PresyoClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = PresyoClient::builder()
            .base_url("https://prices.example.ph/api/v1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://prices.example.ph/api/v1");
    }

    #[test]
    fn test_rejects_bad_scheme_and_zero_timeout() {
        let err = PresyoClient::builder().base_url("localhost:8000").build().err().unwrap();
        assert!(matches!(err, PresyoError::Config(_)));

        let err = PresyoClient::builder().timeout(Duration::ZERO).build().err().unwrap();
        assert!(matches!(err, PresyoError::Config(_)));
    }
}
