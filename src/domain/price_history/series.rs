//! Display series assembly.
//!
//! History is observed newest-first but the order is not guaranteed. The input
//! is reversed and then stable-sorted by date, so any input order yields an
//! ascending series.
//! Points whose date does not parse sort first, in the order received.

use super::{HistoryPoint, SeriesPoint};
use crate::shared::Synthetic;
use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use std::ops::Range;

/// Range of the synthetic chart volume.
pub const VOLUME_RANGE: Range<u64> = 10_000..60_000;

const LABEL_FORMAT: &str = "%b %-d";

/// Parse a service date, accepting a trailing time component.
pub fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn ordered(points: Vec<HistoryPoint>) -> Vec<(Option<NaiveDate>, HistoryPoint)> {
    let mut keyed: Vec<_> = points
        .into_iter()
        .rev()
        .map(|p| (parse_report_date(&p.report_date), p))
        .collect();
    keyed.sort_by_key(|(day, _)| *day);
    keyed
}

fn build(points: Vec<HistoryPoint>, mut volume: impl FnMut() -> u64) -> Vec<SeriesPoint> {
    ordered(points)
        .into_iter()
        .map(|(day, p)| SeriesPoint {
            date: match day {
                Some(d) => d.format(LABEL_FORMAT).to_string(),
                None => p.report_date.clone(),
            },
            report_date: day,
            price: p.price_prevailing.or(p.price_average).unwrap_or(Decimal::ZERO),
            volume: Synthetic::new(volume()),
        })
        .collect()
}

/// Assemble an ascending display series with pseudo-random volumes from `rng`.
pub fn assemble<R: Rng>(points: Vec<HistoryPoint>, rng: &mut R) -> Vec<SeriesPoint> {
    build(points, || rng.gen_range(VOLUME_RANGE))
}

/// Same as [`assemble`] with every volume set to `volume`.
pub fn assemble_fixed_volume(points: Vec<HistoryPoint>, volume: u64) -> Vec<SeriesPoint> {
    build(points, || volume)
}

/// Chart header figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub latest: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub count: usize,
}

impl SeriesSummary {
    /// `None` for an empty series.
    pub fn of(series: &[SeriesPoint]) -> Option<Self> {
        let latest = series.last()?.price;
        let (min, max) = series
            .iter()
            .fold((latest, latest), |(lo, hi), p| (lo.min(p.price), hi.max(p.price)));
        Some(Self {
            latest,
            min,
            max,
            count: series.len(),
        })
    }
}
