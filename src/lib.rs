//! # Bantay Presyo
//!
//! Client-side core of a commodity price dashboard. Pulls data from the price
//! service and turns it into display-ready projections: a resolved commodity,
//! an ascending chart series, a filtered and paginated price table, and a
//! scrolling ticker.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Shared**: id newtypes, date ranges, the `Synthetic<T>` marker and formatting
//! 2. **Domain**: vertical slices with pure projections and sub-clients
//! 3. **HTTP API**: `PresyoHttp`, one GET per endpoint
//! 4. **High-Level Client**: `PresyoClient` with nested sub-clients
//! 5. **Ticker driver**: tokio task running the ticker timers (feature `native`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bantay_presyo::prelude::*;
//!
//! let client = PresyoClient::builder()
//!     .base_url("http://localhost:8000/api/v1")
//!     .build()?;
//!
//! let rice = client.commodities().resolve("rice").await?;
//! let records = client.prices().daily(None).await?;
//! let page = project(&records, &TableQuery::new(DASHBOARD_PAGE_SIZE).with_search("tilapia"));
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes and utilities used across all domains.
pub mod shared;

/// Domain modules (vertical slices).
pub mod domain;

/// Client error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `PresyoClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{CommodityId, DateRange, Latest, MarketId, RecordId, Synthetic, Ticket};

    // Commodity + resolver
    pub use crate::domain::commodity::{resolve, Commodity, MatchRule, Resolution};

    // Market
    pub use crate::domain::market::Market;

    // Prices + table projector
    pub use crate::domain::price::export::{to_csv_string, write_csv};
    pub use crate::domain::price::table::{project, DASHBOARD_PAGE_SIZE, MARKETS_PAGE_SIZE};
    pub use crate::domain::price::{MarketFilter, PriceRecord, TablePage, TableQuery, TableRow};

    // Price history + series assembler
    pub use crate::domain::price_history::{
        assemble, assemble_fixed_volume, HistoryPoint, SeriesPoint, SeriesSummary,
    };

    // Stats
    pub use crate::domain::stats::{DashboardStats, StatCount};

    // Ticker
    pub use crate::domain::ticker::{TickerConfig, TickerItem, TickerState, Trend};
    #[cfg(feature = "native")]
    pub use crate::domain::ticker::driver::{TickerDriver, TickerSource};

    // Errors
    pub use crate::error::{HttpError, PresyoError, RemoteFetchError, Resource};

    // Network
    pub use crate::network::{API_URL_ENV, DEFAULT_API_URL};

    // HTTP client + sub-clients + view loaders
    #[cfg(feature = "http")]
    pub use crate::client::{
        CommoditiesClient, MarketsClient, PresyoClient, PresyoClientBuilder, PriceHistorySubClient,
        PricesClient, StatsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::price::loader::{TableData, TableLoader};
    #[cfg(feature = "http")]
    pub use crate::domain::price_history::loader::{ChartLoad, ChartLoader, ChartRequest};
}
