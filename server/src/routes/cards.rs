use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use cardpulse::models::{CardDetail, PricePoint, PriceTrend, TreatmentFloor};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::meta::parse_time_frame;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CardParams {
    pub time_period: Option<String>,
}

/// Everything a card detail page renders.
#[derive(Serialize)]
pub struct CardPage {
    pub card: CardDetail,
    pub treatments: Vec<TreatmentFloor>,
    pub history: Vec<PricePoint>,
    pub trend: PriceTrend,
}

/// GET /api/cards/:id?time_period=30d
///
/// Card, treatment floors and history are fetched concurrently. Only the
/// card itself is required; the other two degrade to empty lists.
pub async fn get_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(params): Query<CardParams>,
) -> Result<Json<CardPage>, AppError> {
    let time_frame = parse_time_frame(params.time_period.as_deref())?;

    let (card, treatments, history) = tokio::join!(
        state.client.card(id),
        state.client.treatment_floors(id),
        state.client.card_history(id, time_frame),
    );

    let card = card?;
    let treatments = treatments.unwrap_or_else(|e| {
        warn!(card_id = id, error = %e, "treatment floors unavailable");
        Vec::new()
    });
    let history = history.unwrap_or_else(|e| {
        warn!(card_id = id, error = %e, "price history unavailable");
        Vec::new()
    });

    let trend = PriceTrend::from_history(&history);
    Ok(Json(CardPage {
        card,
        treatments,
        history,
        trend,
    }))
}
