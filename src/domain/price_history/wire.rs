//! Wire types for the history endpoint (`/trends/history/{id}`).

use crate::shared::serde_util::lenient_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One historical price report as the service returns it.
///
/// The endpoint answers with full price entries; only the fields the chart
/// needs are kept. Ordering is not guaranteed (observed newest-first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    #[serde(default)]
    pub report_date: String,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub price_prevailing: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub price_average: Option<Decimal>,
}

impl HistoryPoint {
    pub fn new(report_date: &str, price_prevailing: Option<Decimal>) -> Self {
        Self {
            report_date: report_date.to_string(),
            price_prevailing,
            price_average: None,
        }
    }
}
