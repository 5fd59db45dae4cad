//! Unified client error types.

use std::fmt;
use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum PresyoError {
    #[error(transparent)]
    Fetch(#[from] RemoteFetchError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A remote resource exposed by the price service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Commodities,
    Commodity,
    Markets,
    Market,
    DailyPrices,
    PriceExport,
    History,
    DashboardStats,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Commodities => "commodities",
            Resource::Commodity => "commodity",
            Resource::Markets => "markets",
            Resource::Market => "market",
            Resource::DailyPrices => "daily prices",
            Resource::PriceExport => "price export",
            Resource::History => "price history",
            Resource::DashboardStats => "dashboard stats",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gateway call failed. Carries the resource so the caller can say what is missing.
#[derive(Error, Debug)]
#[error("Failed to fetch {resource}: {source}")]
pub struct RemoteFetchError {
    pub resource: Resource,
    #[source]
    pub source: HttpError,
}

impl RemoteFetchError {
    pub fn new(resource: Resource, source: HttpError) -> Self {
        Self { resource, source }
    }

    /// HTTP status code, when the service answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        self.source.status()
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request {status}: {body}")]
    BadRequest { status: u16, body: String },
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::ServerError { status, .. } => Some(*status),
            HttpError::RateLimited => Some(429),
            HttpError::NotFound(_) => Some(404),
            HttpError::BadRequest { status, .. } => Some(*status),
        }
    }
}
