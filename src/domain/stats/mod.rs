//! Dashboard stats: headline counts for the overview cards.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::fmt;
use crate::shared::serde_util::lenient_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One headline count and its change since the previous period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCount {
    #[serde(default)]
    pub count: u64,
    /// Percent change. The service sends `0` today; fractional, signed and
    /// `"0.3%"`-style values are accepted too, and anything else is `None`.
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub change: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub commodities: StatCount,
    #[serde(default)]
    pub markets: StatCount,
    #[serde(default)]
    pub prices: StatCount,
}

impl StatCount {
    /// Signed change badge (`+0.3%`), or `None` when the service sent nothing usable.
    pub fn change_label(&self) -> Option<String> {
        self.change.as_ref().map(fmt::change_percent)
    }
}
