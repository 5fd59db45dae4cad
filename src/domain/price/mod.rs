//! Price domain: daily price reports and the price table.

#[cfg(feature = "http")]
pub mod client;
pub mod export;
#[cfg(feature = "http")]
pub mod loader;
pub mod table;

use crate::domain::commodity::Commodity;
use crate::domain::market::Market;
use crate::shared::serde_util::{lenient_decimal, lenient_nested};
use crate::shared::RecordId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use table::{MarketFilter, TablePage, TableQuery, TableRow};

/// Display text for a relation the service failed to join.
pub const PLACEHOLDER: &str = "Unknown";

/// One price report for a commodity at a market on a date.
///
/// `commodity` and `market` are joined relations and may be missing (or
/// malformed, which is treated the same). Every consumer handles `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_nested::deserialize")]
    pub commodity: Option<Commodity>,
    #[serde(default, deserialize_with = "lenient_nested::deserialize")]
    pub market: Option<Market>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub price_prevailing: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub price_low: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub price_high: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub price_average: Option<Decimal>,
    /// ISO date string (`YYYY-MM-DD`) as sent by the service.
    #[serde(default)]
    pub report_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
}

impl PriceRecord {
    pub fn commodity_name(&self) -> Option<&str> {
        self.commodity.as_ref().map(|c| c.name.as_str())
    }

    pub fn market_name(&self) -> Option<&str> {
        self.market.as_ref().map(|m| m.name.as_str())
    }

    pub fn category(&self) -> Option<&str> {
        self.commodity.as_ref().and_then(|c| c.category())
    }

    pub fn region(&self) -> Option<&str> {
        self.market.as_ref().and_then(|m| m.region())
    }

    /// Prevailing price, falling back to the average when no prevailing price was reported.
    pub fn price(&self) -> Option<Decimal> {
        self.price_prevailing.or(self.price_average)
    }

    /// Parsed report date; `None` if the service sent something that is not `YYYY-MM-DD`.
    pub fn report_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.report_date.trim(), "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_price_record_full_row() {
        let json = r#"{
            "id": "a1",
            "commodity_id": "c1",
            "market_id": "m1",
            "commodity": {"id": "c1", "name": "Galunggong", "category": "Fish"},
            "market": {"id": "m1", "name": "Navotas", "region": "NCR"},
            "price_low": "170.00",
            "price_high": "190.00",
            "price_prevailing": "180.00",
            "price_average": null,
            "report_date": "2025-12-22",
            "report_type": "DAILY_RETAIL"
        }"#;
        let r: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.commodity_name(), Some("Galunggong"));
        assert_eq!(r.market_name(), Some("Navotas"));
        assert_eq!(r.region(), Some("NCR"));
        assert_eq!(r.price(), Some(Decimal::from_str("180.00").unwrap()));
        assert_eq!(r.report_day(), NaiveDate::from_ymd_opt(2025, 12, 22));
    }

    #[test]
    fn test_price_record_missing_relations_still_parses() {
        let json = r#"{"id": 5, "commodity": null, "market": {"bad": true}, "price_average": 46.5, "report_date": "n/a"}"#;
        let r: PriceRecord = serde_json::from_str(json).unwrap();
        assert!(r.commodity.is_none());
        assert!(r.market.is_none());
        assert_eq!(r.category(), None);
        assert_eq!(r.price(), Some(Decimal::from_str("46.5").unwrap()));
        assert_eq!(r.report_day(), None);
    }
}
