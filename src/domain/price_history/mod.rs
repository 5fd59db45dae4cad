//! Price history domain: chart series for one commodity.

#[cfg(feature = "http")]
pub mod client;
#[cfg(feature = "http")]
pub mod loader;
pub mod series;
pub mod wire;

use crate::shared::{fmt, Synthetic};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use series::{assemble, assemble_fixed_volume, SeriesSummary};
pub use wire::HistoryPoint;

/// A single point on a price chart, oldest first within a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// `None` when the service sent a date that does not parse.
    pub report_date: Option<NaiveDate>,
    /// Axis label, e.g. `"Jan 3"`.
    pub date: String,
    pub price: Decimal,
    pub volume: Synthetic<u64>,
}

impl SeriesPoint {
    /// Axis label for the synthetic volume (`50k`).
    pub fn volume_label(&self) -> String {
        fmt::volume_abbr(*self.volume.value())
    }

    pub fn price_label(&self) -> String {
        fmt::peso(&self.price)
    }
}
