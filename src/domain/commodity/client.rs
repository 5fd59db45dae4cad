//! Commodities sub-client.

use crate::client::PresyoClient;
use crate::domain::commodity::{resolve, Commodity, Resolution};
use crate::error::PresyoError;
use crate::shared::CommodityId;

/// Sub-client for commodity operations.
pub struct Commodities<'a> {
    pub(crate) client: &'a PresyoClient,
}

impl<'a> Commodities<'a> {
    /// List the catalog, optionally restricted to one category.
    ///
    /// `Some("all")` is the same as `None`.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<Commodity>, PresyoError> {
        Ok(self.client.http.get_commodities(category).await?)
    }

    pub async fn get(&self, id: &CommodityId) -> Result<Commodity, PresyoError> {
        Ok(self.client.http.get_commodity(id).await?)
    }

    /// Server-side name search (at most 20 results).
    pub async fn search(&self, query: &str) -> Result<Vec<Commodity>, PresyoError> {
        Ok(self.client.http.search_commodities(query).await?)
    }

    /// Fetch the catalog fresh and resolve `target` against it.
    pub async fn resolve(&self, target: &str) -> Result<Resolution, PresyoError> {
        let catalog = self.list(None).await?;
        Ok(resolve(target, &catalog))
    }
}
