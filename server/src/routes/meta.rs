use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use cardpulse::models::{MarketOverview, TimeFrame};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct OverviewParams {
    pub time_period: Option<String>,
}

/// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}

/// GET /api/market/overview?time_period=7d
///
/// Site-wide market summary straight from the upstream API.
pub async fn market_overview(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OverviewParams>,
) -> Result<Json<MarketOverview>, AppError> {
    let time_frame = parse_time_frame(params.time_period.as_deref())?;
    let overview = state.client.market_overview(time_frame).await?;
    Ok(Json(overview))
}

/// Parse an optional `time_period` query value, defaulting to 7d.
pub(crate) fn parse_time_frame(raw: Option<&str>) -> Result<TimeFrame, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(TimeFrame::default()),
        Some(s) => Ok(s.parse::<TimeFrame>()?),
    }
}
