//! Price table projection: filter by market and commodity name, then page.
//!
//! [`project`] is pure: the same records and query always give the same page.
//! It does not clamp an out-of-range page; the caller decides, using
//! [`TableQuery::clamped`] once it knows `total_pages`.

use super::{PriceRecord, PLACEHOLDER};
use crate::shared::fmt;
use rust_decimal::Decimal;
use serde::Serialize;

/// Page size of the dashboard's price table.
pub const DASHBOARD_PAGE_SIZE: usize = 8;

/// Page size of the markets view.
pub const MARKETS_PAGE_SIZE: usize = 10;

/// Sentinel market token meaning "no market filter".
pub const ALL_MARKETS: &str = "all";

// ─── MarketFilter ────────────────────────────────────────────────────────────

/// Market selector: everything, or markets whose name contains a substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MarketFilter {
    #[default]
    All,
    /// Lowercased substring.
    Contains(String),
}

impl MarketFilter {
    pub fn contains(needle: &str) -> Self {
        MarketFilter::Contains(needle.to_lowercase())
    }

    /// Whether a market name passes. A missing market matches as `""`.
    pub fn matches(&self, market_name: Option<&str>) -> bool {
        match self {
            MarketFilter::All => true,
            MarketFilter::Contains(needle) => market_name
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle.as_str()),
        }
    }
}

impl From<&str> for MarketFilter {
    /// `"all"` (any case) selects every market; anything else is a substring.
    fn from(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case(ALL_MARKETS) {
            MarketFilter::All
        } else {
            MarketFilter::contains(token)
        }
    }
}

// ─── TableQuery ──────────────────────────────────────────────────────────────

/// Immutable view state of the price table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub market: MarketFilter,
    /// Commodity-name substring, compared case-insensitively; empty matches everything.
    pub search: String,
    /// 1-based page number.
    pub page: u32,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self::new(DASHBOARD_PAGE_SIZE)
    }
}

impl TableQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            market: MarketFilter::All,
            search: String::new(),
            page: 1,
            page_size,
        }
    }

    /// Change the market filter. Returns to page 1.
    pub fn with_market(self, market: impl Into<MarketFilter>) -> Self {
        Self {
            market: market.into(),
            page: 1,
            ..self
        }
    }

    /// Change the search term. Returns to page 1.
    pub fn with_search(self, search: &str) -> Self {
        Self {
            search: search.trim().to_lowercase(),
            page: 1,
            ..self
        }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    /// Pull `page` into `1..=total_pages`.
    pub fn clamped(self, total_pages: u32) -> Self {
        let page = self.page.clamp(1, total_pages.max(1));
        Self { page, ..self }
    }

    pub fn matches(&self, record: &PriceRecord) -> bool {
        self.market.matches(record.market_name()) && self.matches_search(record)
    }

    fn matches_search(&self, record: &PriceRecord) -> bool {
        let needle = self.search.trim();
        if needle.is_empty() {
            return true;
        }
        record
            .commodity_name()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

// ─── TablePage ───────────────────────────────────────────────────────────────

/// One page of the filtered table plus the counts the pager needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage<T> {
    pub rows: Vec<T>,
    pub filtered_count: usize,
    /// At least 1, even when nothing matched.
    pub total_pages: u32,
    pub page: u32,
    pub page_size: usize,
}

impl<T> TablePage<T> {
    pub fn empty(query: &TableQuery) -> Self {
        Self {
            rows: Vec::new(),
            filtered_count: 0,
            total_pages: 1,
            page: query.page,
            page_size: query.effective_page_size(),
        }
    }

    /// 1-based inclusive range of the rows shown, for "Showing X–Y of Z".
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = (self.page as usize - 1) * self.page_size + 1;
        Some((first, first + self.rows.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> TablePage<U> {
        TablePage {
            rows: self.rows.into_iter().map(f).collect(),
            filtered_count: self.filtered_count,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Filter `records` by `query` and cut out the requested page.
pub fn project<'r>(records: &'r [PriceRecord], query: &TableQuery) -> TablePage<&'r PriceRecord> {
    let size = query.effective_page_size();
    let filtered: Vec<&PriceRecord> = records.iter().filter(|r| query.matches(r)).collect();
    let total_pages = filtered.len().div_ceil(size).max(1) as u32;

    let rows = if query.page == 0 {
        Vec::new()
    } else {
        let start = (query.page as usize - 1).saturating_mul(size);
        filtered.iter().skip(start).take(size).copied().collect()
    };

    TablePage {
        rows,
        filtered_count: filtered.len(),
        total_pages,
        page: query.page,
        page_size: size,
    }
}

// ─── TableRow ────────────────────────────────────────────────────────────────

/// Display projection of one record with placeholders filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub commodity: String,
    pub category: String,
    pub market: String,
    pub price: Option<Decimal>,
    /// `₱52.50`, or `—` when the record carries no price.
    pub price_label: String,
    pub report_date: String,
}

impl From<&PriceRecord> for TableRow {
    fn from(r: &PriceRecord) -> Self {
        let price = r.price();
        Self {
            commodity: r.commodity_name().unwrap_or(PLACEHOLDER).to_string(),
            category: r.category().unwrap_or(PLACEHOLDER).to_string(),
            market: r.market_name().unwrap_or(PLACEHOLDER).to_string(),
            price,
            price_label: price.map(|p| fmt::peso(&p)).unwrap_or_else(|| "—".to_string()),
            report_date: r.report_date.clone(),
        }
    }
}
