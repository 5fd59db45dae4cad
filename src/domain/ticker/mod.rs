//! Ticker domain: a scrolling strip of current prices.
//!
//! [`TickerItem`]s are built from the first records of the daily fetch.
//! [`state::TickerState`] is the pure scroll model; [`driver::TickerDriver`]
//! (feature `native`) runs it on tokio timers.

#[cfg(feature = "native")]
pub mod driver;
pub mod state;

use crate::domain::price::{PriceRecord, PLACEHOLDER};
use crate::shared::{fmt, Synthetic};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::{TickerConfig, TickerState};

/// Number of records shown in the ticker.
pub const DEFAULT_SAMPLE_SIZE: usize = 30;

/// Bound of the synthetic change percentage, in tenths of a percent.
const CHANGE_TENTHS: i64 = 50;

/// Direction badge shown next to a ticker price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// One entry of the ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerItem {
    pub name: String,
    pub price: Option<Decimal>,
    /// Placeholder percentage in `[-5.0, 5.0]`; not derived from real prices.
    pub change: Synthetic<Decimal>,
}

impl TickerItem {
    pub fn new(name: &str, price: Option<Decimal>, change: Decimal) -> Self {
        Self {
            name: name.to_string(),
            price,
            change: Synthetic::new(change),
        }
    }

    pub fn from_record<R: Rng>(record: &PriceRecord, rng: &mut R) -> Self {
        Self::new(
            record.commodity_name().unwrap_or(PLACEHOLDER),
            record.price(),
            synthetic_change(rng),
        )
    }

    pub fn trend(&self) -> Trend {
        let change = self.change.value();
        if change.is_zero() {
            Trend::Flat
        } else if change.is_sign_positive() {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// `+2.3%`, `-1.5%`, `0.0%`.
    pub fn change_label(&self) -> String {
        fmt::change_percent(self.change.value())
    }

    pub fn price_label(&self) -> String {
        self.price.as_ref().map(fmt::peso).unwrap_or_else(|| "—".to_string())
    }
}

/// Pseudo-random change percentage in `[-5.0, 5.0]` with one decimal.
pub fn synthetic_change<R: Rng>(rng: &mut R) -> Decimal {
    Decimal::new(rng.gen_range(-CHANGE_TENTHS..=CHANGE_TENTHS), 1)
}

/// Ticker items for the first `sample_size` records.
pub fn sample<R: Rng>(records: &[PriceRecord], sample_size: usize, rng: &mut R) -> Vec<TickerItem> {
    records
        .iter()
        .take(sample_size)
        .map(|r| TickerItem::from_record(r, rng))
        .collect()
}
