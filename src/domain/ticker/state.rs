//! Pure scroll model for the ticker.
//!
//! The strip moves left by `step_px` every `step_interval`. Once the offset
//! has travelled further than one copy of the sample (`items × item_width_px`)
//! it snaps back to 0; with the sample rendered three times the snap is not
//! visible. Time is fed in explicitly, so the model is driven the same way by
//! the tokio driver and by tests.

use super::{TickerItem, DEFAULT_SAMPLE_SIZE};
use serde::Serialize;
use std::time::Duration;

/// Timing and geometry of the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickerConfig {
    pub sample_size: usize,
    pub step_interval: Duration,
    pub step_px: u32,
    pub item_width_px: u32,
    pub refresh_interval: Duration,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            step_interval: Duration::from_millis(30),
            step_px: 1,
            item_width_px: 200,
            refresh_interval: Duration::from_secs(60),
        }
    }
}

/// Snapshot of the ticker: the sample and how far it has scrolled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerState {
    pub items: Vec<TickerItem>,
    /// Horizontal offset in px, always in `[-total_width, 0]`.
    pub offset: i64,
    /// Time not yet consumed by a whole step.
    #[serde(skip)]
    pub carry: Duration,
    #[serde(skip)]
    pub config: TickerConfig,
}

impl Default for TickerState {
    fn default() -> Self {
        Self::new(TickerConfig::default())
    }
}

impl TickerState {
    pub fn new(config: TickerConfig) -> Self {
        Self {
            items: Vec::new(),
            offset: 0,
            carry: Duration::ZERO,
            config,
        }
    }

    /// Width of one copy of the sample, in px.
    pub fn total_width(&self) -> i64 {
        self.items.len() as i64 * i64::from(self.config.item_width_px)
    }

    /// State after `elapsed` more time has passed.
    pub fn advance(&self, elapsed: Duration) -> TickerState {
        let step = self.config.step_interval;
        if step.is_zero() {
            return self.clone();
        }
        let pending = self.carry + elapsed;
        let steps = pending.as_nanos() / step.as_nanos();
        let carry = Duration::from_nanos((pending.as_nanos() % step.as_nanos()) as u64);

        TickerState {
            items: self.items.clone(),
            offset: scroll(self.offset, steps, i64::from(self.config.step_px), self.total_width()),
            carry,
            config: self.config,
        }
    }

    /// Replace the sample. The offset is kept unless it is past the new width.
    pub fn with_sample(&self, items: Vec<TickerItem>) -> TickerState {
        let mut next = TickerState {
            items,
            offset: self.offset,
            carry: self.carry,
            config: self.config,
        };
        if next.offset.abs() > next.total_width() {
            next.offset = 0;
        }
        next
    }

    /// The sample repeated three times, for a seamless strip.
    pub fn display_items(&self) -> impl Iterator<Item = &TickerItem> + '_ {
        self.items.iter().chain(self.items.iter()).chain(self.items.iter())
    }
}

fn scroll(mut offset: i64, mut steps: u128, step_px: i64, width: i64) -> i64 {
    if step_px == 0 {
        return offset;
    }
    // Positions visited from 0 before snapping back: 0, -s, -2s, ..., -(W/s)*s.
    let cycle = (width / step_px) as u128 + 1;
    while steps > 0 {
        if offset == 0 && steps >= cycle {
            steps %= cycle;
            continue;
        }
        offset -= step_px;
        if offset.abs() > width {
            offset = 0;
        }
        steps -= 1;
    }
    offset
}
