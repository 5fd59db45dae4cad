//! Peso prices, change badges and abbreviated volumes.

use super::num::{group_thousands, trim_trailing_zeros};
use rust_decimal::Decimal;

/// Format a price in pesos with two decimals and thousands separators (`₱1,234.50`).
pub fn peso(value: &Decimal) -> String {
    let rounded = value.round_dp(2);
    let formatted = format!("{:.2}", rounded);
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-₱{}", group_thousands(abs)),
        None => format!("₱{}", group_thousands(&formatted)),
    }
}

/// Format a change percentage with an explicit sign and one decimal (`+2.3%`).
///
/// Zero renders without a sign.
pub fn change_percent(value: &Decimal) -> String {
    let rounded = value.round_dp(1);
    if rounded.is_zero() {
        return "0.0%".to_string();
    }
    let sign = if rounded.is_sign_positive() { "+" } else { "" };
    format!("{sign}{:.1}%", rounded)
}

/// Abbreviate a volume for an axis label (`50000` → `50k`, `1250000` → `1.25M`).
pub fn volume_abbr(volume: u64) -> String {
    let (scaled, suffix) = if volume >= 1_000_000 {
        (volume as f64 / 1_000_000.0, "M")
    } else if volume >= 1_000 {
        (volume as f64 / 1_000.0, "k")
    } else {
        return volume.to_string();
    };
    let formatted = format!("{:.2}", scaled);
    format!("{}{}", trim_trailing_zeros(&formatted), suffix)
}
