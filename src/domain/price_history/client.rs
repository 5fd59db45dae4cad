//! Price history sub-client.

use crate::client::PresyoClient;
use crate::domain::price_history::{series, HistoryPoint, SeriesPoint};
use crate::error::PresyoError;
use crate::shared::{CommodityId, DateRange};
use rand::Rng;

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a PresyoClient,
}

impl<'a> PriceHistoryClient<'a> {
    /// Raw history, at most `range.limit()` points, in service order.
    pub async fn get(&self, commodity_id: &CommodityId, range: DateRange) -> Result<Vec<HistoryPoint>, PresyoError> {
        Ok(self.client.http.get_history(commodity_id, range.limit()).await?)
    }

    /// History assembled into an ascending display series.
    pub async fn series<R: Rng>(
        &self,
        commodity_id: &CommodityId,
        range: DateRange,
        rng: &mut R,
    ) -> Result<Vec<SeriesPoint>, PresyoError> {
        let points = self.get(commodity_id, range).await?;
        Ok(series::assemble(points, rng))
    }
}
