//! Tokio driver for the ticker: two timers in one task.
//!
//! A single background task owns the scroll interval and the refresh
//! interval. Scroll steps publish a new [`TickerState`] through a `watch`
//! channel. Refresh fetches run in a `JoinSet` so a slow service never stalls
//! scrolling; a failed refresh is logged and the previous sample stays.
//! Each fetch carries the sequence number of its refresh tick, and a result
//! older than the last applied sample is dropped.
//!
//! Stopping (or dropping) the driver aborts the task, which drops the
//! `JoinSet` and with it every fetch still in flight.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use super::{sample, TickerConfig, TickerState};
use crate::client::PresyoClient;
use crate::domain::price::PriceRecord;
use crate::error::PresyoError;

/// Where the ticker gets its records from.
#[async_trait]
pub trait TickerSource: Send + Sync + 'static {
    async fn fetch_records(&self) -> Result<Vec<PriceRecord>, PresyoError>;
}

#[async_trait]
impl TickerSource for PresyoClient {
    async fn fetch_records(&self) -> Result<Vec<PriceRecord>, PresyoError> {
        self.prices().daily(None).await
    }
}

/// Handle to a running ticker.
pub struct TickerDriver {
    state_rx: watch::Receiver<TickerState>,
    task: Option<JoinHandle<()>>,
}

impl TickerDriver {
    /// Start both timers. Must be called from within a tokio runtime.
    pub fn spawn<S: TickerSource>(config: TickerConfig, source: S) -> Self {
        let (state_tx, state_rx) = watch::channel(TickerState::new(config));
        let task = tokio::spawn(run_task(config, Arc::new(source), state_tx));
        Self {
            state_rx,
            task: Some(task),
        }
    }

    /// A receiver that sees every published state.
    pub fn subscribe(&self) -> watch::Receiver<TickerState> {
        self.state_rx.clone()
    }

    /// The most recently published state.
    pub fn current(&self) -> TickerState {
        self.state_rx.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop both timers and abort any refresh in flight.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("ticker stopped");
        }
    }
}

impl Drop for TickerDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A finished refresh, tagged with the tick that started it.
type Fetch = (u64, Result<Vec<PriceRecord>, PresyoError>);

async fn run_task<S: TickerSource>(
    config: TickerConfig,
    source: Arc<S>,
    state_tx: watch::Sender<TickerState>,
) {
    // tokio intervals reject a zero period
    let mut scroll = time::interval(config.step_interval.max(Duration::from_millis(1)));
    scroll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut refresh = time::interval(config.refresh_interval.max(Duration::from_millis(1)));
    refresh.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut fetches: JoinSet<Fetch> = JoinSet::new();
    let mut rng = StdRng::from_entropy();
    let mut state = TickerState::new(config);
    let mut last = Instant::now();
    let mut next_seq: u64 = 0;
    let mut applied: Option<u64> = None;

    loop {
        tokio::select! {
            now = scroll.tick() => {
                state = state.advance(now.saturating_duration_since(last));
                last = now;
                state_tx.send_replace(state.clone());
            }
            _ = refresh.tick() => {
                let seq = next_seq;
                next_seq += 1;
                let source = Arc::clone(&source);
                fetches.spawn(async move { (seq, source.fetch_records().await) });
            }
            Some(joined) = fetches.join_next() => {
                match joined {
                    Ok((seq, _)) if applied.is_some_and(|a| seq < a) => {
                        debug!(seq, "dropping superseded ticker refresh");
                    }
                    Ok((seq, Ok(records))) => {
                        let items = sample(&records, config.sample_size, &mut rng);
                        debug!(seq, items = items.len(), "ticker sample refreshed");
                        applied = Some(seq);
                        state = state.with_sample(items);
                        state_tx.send_replace(state.clone());
                    }
                    Ok((seq, Err(e))) => warn!(seq, error = %e, "ticker refresh failed, keeping previous sample"),
                    Err(e) => warn!(error = %e, "ticker refresh task did not complete"),
                }
            }
        }
    }
}
