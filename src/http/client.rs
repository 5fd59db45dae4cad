//! Low-level HTTP client, `PresyoHttp`.
//!
//! One method per service endpoint, each issuing exactly one GET. Failures are
//! returned as [`RemoteFetchError`] naming the resource; nothing here logs a
//! failure or retries. Internal to the crate; the high-level client wraps this.

use crate::domain::commodity::Commodity;
use crate::domain::market::Market;
use crate::domain::price::PriceRecord;
use crate::domain::price_history::HistoryPoint;
use crate::domain::stats::DashboardStats;
use crate::error::{HttpError, PresyoError, RemoteFetchError, Resource};
use crate::shared::{CommodityId, MarketId};

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Low-level HTTP client for the price service REST API.
#[derive(Clone)]
pub struct PresyoHttp {
    base_url: String,
    client: Client,
}

fn category_filter(category: Option<&str>) -> Option<&str> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
}

fn with_query(url: String, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return url;
    }
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect();
    format!("{}?{}", url, query.join("&"))
}

impl PresyoHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PresyoError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| PresyoError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Commodities ──────────────────────────────────────────────────────

    pub async fn get_commodities(&self, category: Option<&str>) -> Result<Vec<Commodity>, RemoteFetchError> {
        let mut params = Vec::new();
        if let Some(c) = category_filter(category) {
            params.push(("category", c.to_string()));
        }
        let url = with_query(format!("{}/commodities", self.base_url), &params);
        self.get(&url, Resource::Commodities).await
    }

    pub async fn get_commodity(&self, id: &CommodityId) -> Result<Commodity, RemoteFetchError> {
        let url = format!("{}/commodities/{}", self.base_url, urlencoding::encode(id.as_str()));
        self.get(&url, Resource::Commodity).await
    }

    pub async fn search_commodities(&self, query: &str) -> Result<Vec<Commodity>, RemoteFetchError> {
        let url = format!(
            "{}/commodities/search/{}",
            self.base_url,
            urlencoding::encode(query.trim())
        );
        self.get(&url, Resource::Commodities).await
    }

    // ── Markets ──────────────────────────────────────────────────────────

    pub async fn get_markets(&self) -> Result<Vec<Market>, RemoteFetchError> {
        let url = format!("{}/markets", self.base_url);
        self.get(&url, Resource::Markets).await
    }

    pub async fn get_market(&self, id: &MarketId) -> Result<Market, RemoteFetchError> {
        let url = format!("{}/markets/{}", self.base_url, urlencoding::encode(id.as_str()));
        self.get(&url, Resource::Market).await
    }

    pub async fn search_markets(&self, query: &str) -> Result<Vec<Market>, RemoteFetchError> {
        let url = format!(
            "{}/markets/search/{}",
            self.base_url,
            urlencoding::encode(query.trim())
        );
        self.get(&url, Resource::Markets).await
    }

    // ── Prices ───────────────────────────────────────────────────────────

    pub async fn get_daily_prices(&self, report_date: Option<NaiveDate>) -> Result<Vec<PriceRecord>, RemoteFetchError> {
        let mut params = Vec::new();
        if let Some(d) = report_date {
            params.push(("report_date", d.format("%Y-%m-%d").to_string()));
        }
        let url = with_query(format!("{}/prices/daily", self.base_url), &params);
        self.get(&url, Resource::DailyPrices).await
    }

    pub async fn get_latest_prices(&self, skip: u32, limit: u32) -> Result<Vec<PriceRecord>, RemoteFetchError> {
        let url = with_query(
            format!("{}/prices/daily", self.base_url),
            &[("skip", skip.to_string()), ("limit", limit.to_string())],
        );
        self.get(&url, Resource::DailyPrices).await
    }

    pub async fn export_prices_csv(&self, report_date: Option<NaiveDate>) -> Result<String, RemoteFetchError> {
        let mut params = Vec::new();
        if let Some(d) = report_date {
            params.push(("report_date", d.format("%Y-%m-%d").to_string()));
        }
        let url = with_query(format!("{}/prices/export", self.base_url), &params);
        self.get_text(&url, Resource::PriceExport).await
    }

    // ── Trends ───────────────────────────────────────────────────────────

    pub async fn get_history(&self, id: &CommodityId, limit: u32) -> Result<Vec<HistoryPoint>, RemoteFetchError> {
        let url = with_query(
            format!("{}/trends/history/{}", self.base_url, urlencoding::encode(id.as_str())),
            &[("limit", limit.to_string())],
        );
        self.get(&url, Resource::History).await
    }

    // ── Stats ────────────────────────────────────────────────────────────

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, RemoteFetchError> {
        let url = format!("{}/stats/dashboard", self.base_url);
        self.get(&url, Resource::DashboardStats).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str, resource: Resource) -> Result<T, RemoteFetchError> {
        let resp = self.send(url).await.map_err(|e| RemoteFetchError::new(resource, e))?;
        resp.json::<T>()
            .await
            .map_err(|e| RemoteFetchError::new(resource, HttpError::from(e)))
    }

    async fn get_text(&self, url: &str, resource: Resource) -> Result<String, RemoteFetchError> {
        let resp = self.send(url).await.map_err(|e| RemoteFetchError::new(resource, e))?;
        resp.text()
            .await
            .map_err(|e| RemoteFetchError::new(resource, HttpError::from(e)))
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, HttpError> {
        debug!(url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest {
                status: status_code,
                body: body_text,
            }),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
