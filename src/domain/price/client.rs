//! Prices sub-client.

use crate::client::PresyoClient;
use crate::domain::price::table::{self, TablePage, TableQuery, TableRow};
use crate::domain::price::PriceRecord;
use crate::error::PresyoError;
use chrono::NaiveDate;

/// Largest page the service accepts for `latest`.
pub const MAX_LATEST_LIMIT: u32 = 1000;

/// Sub-client for price operations.
pub struct Prices<'a> {
    pub(crate) client: &'a PresyoClient,
}

impl<'a> Prices<'a> {
    /// Price reports for one day, or for the most recent report date when `None`.
    pub async fn daily(&self, report_date: Option<NaiveDate>) -> Result<Vec<PriceRecord>, PresyoError> {
        Ok(self.client.http.get_daily_prices(report_date).await?)
    }

    /// Latest prices with server-side pagination. `limit` is clamped to `1..=1000`.
    pub async fn latest(&self, skip: u32, limit: u32) -> Result<Vec<PriceRecord>, PresyoError> {
        let limit = limit.clamp(1, MAX_LATEST_LIMIT);
        Ok(self.client.http.get_latest_prices(skip, limit).await?)
    }

    /// Raw CSV produced by the service.
    pub async fn export_csv(&self, report_date: Option<NaiveDate>) -> Result<String, PresyoError> {
        Ok(self.client.http.export_prices_csv(report_date).await?)
    }

    /// Fetch a day's reports and project one table page of display rows.
    pub async fn table(
        &self,
        report_date: Option<NaiveDate>,
        query: &TableQuery,
    ) -> Result<TablePage<TableRow>, PresyoError> {
        let records = self.daily(report_date).await?;
        Ok(table::project(&records, query).map(TableRow::from))
    }
}
