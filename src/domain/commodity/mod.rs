//! Commodity domain: the tracked catalog and target resolution.

#[cfg(feature = "http")]
pub mod client;
pub mod resolve;

use crate::shared::CommodityId;
use serde::{Deserialize, Serialize};

pub use resolve::{resolve, MatchRule, Resolution};

/// A tracked commodity as returned by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commodity {
    pub id: CommodityId,
    pub name: String,
    /// Coarse grouping ("Rice", "Fish", ...). Some catalog rows have none.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Commodity {
    pub fn new(id: impl Into<CommodityId>, name: &str, category: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            category: Some(category.to_string()),
            variant: None,
            unit: None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
