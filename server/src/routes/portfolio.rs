use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use cardpulse::{value_portfolio, Holding, PortfolioSummary};
use serde::Deserialize;

use super::meta::parse_time_frame;
use crate::error::AppError;
use crate::state::AppState;

pub const MAX_HOLDINGS: usize = 2_000;

#[derive(Deserialize)]
pub struct PortfolioRequest {
    pub time_period: Option<String>,
    pub holdings: Vec<Holding>,
}

/// POST /api/portfolio/value
///
/// Values caller-supplied holdings at current market prices.
pub async fn value_holdings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PortfolioRequest>,
) -> Result<Json<PortfolioSummary>, AppError> {
    if req.holdings.len() > MAX_HOLDINGS {
        return Err(AppError::bad_request(format!(
            "Too many holdings: {} (limit {MAX_HOLDINGS})",
            req.holdings.len()
        )));
    }
    let time_frame = parse_time_frame(req.time_period.as_deref())?;

    if req.holdings.is_empty() {
        return Ok(Json(PortfolioSummary::default()));
    }

    let cards = state.client.cards(time_frame).await?;
    Ok(Json(value_portfolio(&req.holdings, &cards)))
}
