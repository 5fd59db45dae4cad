//! Markets sub-client.

use crate::client::PresyoClient;
use crate::domain::market::Market;
use crate::error::PresyoError;
use crate::shared::MarketId;

/// Sub-client for market operations.
pub struct Markets<'a> {
    pub(crate) client: &'a PresyoClient,
}

impl<'a> Markets<'a> {
    pub async fn list(&self) -> Result<Vec<Market>, PresyoError> {
        Ok(self.client.http.get_markets().await?)
    }

    pub async fn get(&self, id: &MarketId) -> Result<Market, PresyoError> {
        Ok(self.client.http.get_market(id).await?)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Market>, PresyoError> {
        Ok(self.client.http.search_markets(query).await?)
    }
}
