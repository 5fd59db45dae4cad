//! Market domain: the physical markets price reports come from.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::MarketId;
use serde::{Deserialize, Serialize};

/// A monitored market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub id: MarketId,
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Row is a regional average rather than a single market.
    #[serde(default)]
    pub is_regional_average: bool,
}

impl Market {
    pub fn new(id: impl Into<MarketId>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            region: None,
            city: None,
            is_regional_average: false,
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
