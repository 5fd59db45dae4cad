//! Display formatting for prices, synthetic change percentages, and volumes.

pub mod num;
pub mod price;

pub use price::{change_percent, peso, volume_abbr};
