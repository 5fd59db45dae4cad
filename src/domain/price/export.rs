//! CSV export of price records, in the same column layout the service's
//! `/prices/export` endpoint produces.

use super::{PriceRecord, PLACEHOLDER};
use crate::error::PresyoError;
use rust_decimal::Decimal;
use std::io;

pub const HEADER: [&str; 8] = [
    "Commodity",
    "Category",
    "Market",
    "Region",
    "Low",
    "High",
    "Prevailing",
    "Date",
];

fn cell(value: Option<Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

fn row(r: &PriceRecord) -> [String; 8] {
    [
        r.commodity_name().unwrap_or(PLACEHOLDER).to_string(),
        match &r.commodity {
            Some(c) => c.category().unwrap_or_default().to_string(),
            None => PLACEHOLDER.to_string(),
        },
        r.market_name().unwrap_or(PLACEHOLDER).to_string(),
        r.region().unwrap_or_default().to_string(),
        cell(r.price_low),
        cell(r.price_high),
        cell(r.price()),
        r.report_date.clone(),
    ]
}

/// Write `records` as CSV with a header row. Returns the number of data rows.
pub fn write_csv<W: io::Write>(writer: W, records: &[PriceRecord]) -> Result<usize, PresyoError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for r in records {
        wtr.write_record(row(r))?;
    }
    wtr.flush()?;
    Ok(records.len())
}

pub fn to_csv_string(records: &[PriceRecord]) -> Result<String, PresyoError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| PresyoError::Config(format!("CSV output is not UTF-8: {e}")))
}
