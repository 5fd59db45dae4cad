//! Stats sub-client.

use crate::client::PresyoClient;
use crate::domain::stats::DashboardStats;
use crate::error::PresyoError;

pub struct Stats<'a> {
    pub(crate) client: &'a PresyoClient,
}

impl<'a> Stats<'a> {
    pub async fn dashboard(&self) -> Result<DashboardStats, PresyoError> {
        Ok(self.client.http.get_dashboard_stats().await?)
    }
}
