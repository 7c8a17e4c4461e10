use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use cardpulse::{MarketFilter, MarketSnapshot};
use serde::Deserialize;

use super::meta::parse_time_frame;
use crate::error::AppError;
use crate::state::AppState;

pub const DEFAULT_TOP_N: usize = 10;
pub const MAX_TOP_N: usize = 100;

/// Raw query values; parsed in the handler so bad input gets a JSON 400.
#[derive(Deserialize)]
pub struct DashboardParams {
    pub time_period: Option<String>,
    pub hide_low_signal: Option<String>,
    pub top: Option<String>,
}

/// GET /api/dashboard?time_period=7d&hide_low_signal=true&top=10
///
/// Totals, top-N lists and distribution buckets for every card in the window.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<MarketSnapshot>, AppError> {
    let time_frame = parse_time_frame(params.time_period.as_deref())?;
    let hide_low_signal = parse_flag(params.hide_low_signal.as_deref())?;
    let top_n = parse_top(params.top.as_deref())?;
    let filter = MarketFilter::new(time_frame, hide_low_signal);

    let cards = state.client.cards(time_frame).await?;
    Ok(Json(MarketSnapshot::compute(&cards, &filter, top_n)))
}

fn parse_flag(raw: Option<&str>) -> Result<bool, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(AppError::bad_request(format!(
            "Invalid hide_low_signal '{v}' (expected true or false)"
        ))),
    }
}

/// Defaults to [`DEFAULT_TOP_N`]; values past the limits are clamped.
fn parse_top(raw: Option<&str>) -> Result<usize, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_TOP_N),
        Some(v) => v
            .parse::<usize>()
            .map(|n| n.clamp(1, MAX_TOP_N))
            .map_err(|_| AppError::bad_request(format!("Invalid top '{v}' (expected a positive integer)"))),
    }
}
