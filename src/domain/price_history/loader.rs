//! View-level chart loader.
//!
//! Resolves the chart target, fetches its history, and assembles the series.
//! Failures are logged and become [`ChartLoad::Failed`]; the view never sees
//! an error. A load that was superseded while in flight returns `None`.

use crate::client::PresyoClient;
use crate::domain::commodity::Resolution;
use crate::domain::price_history::{series, SeriesPoint, SeriesSummary};
use crate::error::PresyoError;
use crate::shared::{CommodityId, DateRange, Latest};
use serde::Serialize;
use tracing::{debug, warn};

/// What the chart is asked to show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ChartRequest {
    /// Commodity name, category token, free text, or `"all"`.
    pub target: String,
    pub range: DateRange,
}

impl ChartRequest {
    pub fn new(target: impl Into<String>, range: DateRange) -> Self {
        Self {
            target: target.into(),
            range,
        }
    }
}

/// Outcome of one chart load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChartLoad {
    Ready {
        commodity_id: CommodityId,
        commodity_name: String,
        series: Vec<SeriesPoint>,
        summary: SeriesSummary,
    },
    /// Nothing to draw yet: the target did not resolve or has no history.
    AwaitingData,
    /// The service could not be reached or answered with an error.
    Failed { message: String },
}

impl ChartLoad {
    pub fn is_ready(&self) -> bool {
        matches!(self, ChartLoad::Ready { .. })
    }
}

#[derive(Debug, Default)]
pub struct ChartLoader {
    latest: Latest,
}

impl ChartLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `request`. `None` means a newer request (or [`ChartLoader::cancel`])
    /// superseded this one and the result was dropped.
    pub async fn load(&self, client: &PresyoClient, request: &ChartRequest) -> Option<ChartLoad> {
        let ticket = self.latest.begin(request.clone());
        let fetched = fetch(client, request).await;
        if !self.latest.is_current(&ticket) {
            debug!(commodity = %request.target, range = %request.range, "dropping stale chart load");
            return None;
        }

        Some(match fetched {
            Ok(None) => ChartLoad::AwaitingData,
            Ok(Some((id, name, points))) => {
                let series = series::assemble(points, &mut rand::thread_rng());
                match SeriesSummary::of(&series) {
                    Some(summary) => ChartLoad::Ready {
                        commodity_id: id,
                        commodity_name: name,
                        series,
                        summary,
                    },
                    None => ChartLoad::AwaitingData,
                }
            }
            Err(e) => {
                warn!(commodity = %request.target, range = %request.range, error = %e, "chart load failed");
                ChartLoad::Failed {
                    message: e.to_string(),
                }
            }
        })
    }

    /// Drop any load still in flight (the chart went away).
    pub fn cancel(&self) {
        self.latest.invalidate();
    }
}

type Fetched = Option<(CommodityId, String, Vec<super::HistoryPoint>)>;

async fn fetch(client: &PresyoClient, request: &ChartRequest) -> Result<Fetched, PresyoError> {
    let (id, name) = match client.commodities().resolve(&request.target).await? {
        Resolution::Resolved { id, name, .. } => (id, name),
        Resolution::Unresolved => return Ok(None),
    };
    let points = client.price_history().get(&id, request.range).await?;
    Ok(Some((id, name, points)))
}
