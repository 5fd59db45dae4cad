//! View-level loader for the price table.
//!
//! Fetch failures never reach the view: they are logged and the table shows
//! an empty result. Filtering and paging happen locally on the loaded records,
//! so changing the query never triggers a fetch.

use crate::client::PresyoClient;
use crate::domain::price::table::{self, TablePage, TableQuery, TableRow};
use crate::domain::price::PriceRecord;
use crate::shared::Latest;
use chrono::NaiveDate;
use tracing::warn;

/// Records backing the table for one report date.
#[derive(Debug, Clone, Default)]
pub struct TableData {
    pub report_date: Option<NaiveDate>,
    pub records: Vec<PriceRecord>,
    /// Set when the fetch failed and `records` is the empty fallback.
    pub failed: bool,
}

impl TableData {
    pub fn page(&self, query: &TableQuery) -> TablePage<TableRow> {
        table::project(&self.records, query).map(TableRow::from)
    }
}

#[derive(Debug, Default)]
pub struct TableLoader {
    latest: Latest,
}

impl TableLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the records for `report_date`.
    ///
    /// Returns `None` when a newer load started (or [`TableLoader::cancel`] ran)
    /// while this one was in flight; the caller keeps what it has.
    pub async fn load(&self, client: &PresyoClient, report_date: Option<NaiveDate>) -> Option<TableData> {
        let ticket = self.latest.begin(report_date);
        let result = client.prices().daily(report_date).await;
        if !self.latest.is_current(&ticket) {
            return None;
        }
        Some(match result {
            Ok(records) => TableData {
                report_date,
                records,
                failed: false,
            },
            Err(e) => {
                warn!(error = %e, "price table load failed, showing empty table");
                TableData {
                    report_date,
                    records: Vec::new(),
                    failed: true,
                }
            }
        })
    }

    /// Drop any load still in flight.
    pub fn cancel(&self) {
        self.latest.invalidate();
    }
}
