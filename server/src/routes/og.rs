use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use cardpulse::models::TimeFrame;
use cardpulse::{og, CardPulseError, OgCard};
use serde::Deserialize;
use tracing::warn;

use super::cached_body;
use crate::error::EdgeError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CardImageParams {
    #[serde(rename = "cardId")]
    pub card_id: Option<String>,
}

#[derive(Deserialize)]
pub struct ShareImageParams {
    pub card: Option<String>,
    pub price: Option<String>,
}

/// GET /api/og?cardId=123
///
/// Preview image of a card page: name, set, price and a 30 day chart.
/// A failed history fetch still renders, with a flat chart.
pub async fn card_image(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CardImageParams>,
) -> Result<Response, EdgeError> {
    let raw = params
        .card_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(EdgeError::bad_request("Missing cardId"))?;
    let id: i64 = raw
        .parse()
        .map_err(|_| EdgeError::bad_request("Invalid cardId"))?;

    let (card, history) = tokio::join!(
        state.client.card(id),
        state.client.card_history(id, TimeFrame::Month),
    );

    let card = card.map_err(|e| match e {
        CardPulseError::NotFound(_) => EdgeError::new(StatusCode::NOT_FOUND, "Card not found"),
        other => {
            warn!(card_id = id, error = %other, "card fetch failed for preview image");
            EdgeError::new(StatusCode::BAD_GATEWAY, "Failed to fetch card")
        }
    })?;
    let history = history.unwrap_or_else(|e| {
        warn!(card_id = id, error = %e, "history unavailable, rendering flat chart");
        Vec::new()
    });

    render(&state, OgCard::from_detail(&card, &history)).await
}

/// GET /api/og/share?card=Storm%20Caller&price=12.50
///
/// Preview image from query values alone; no upstream call.
pub async fn share_image(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ShareImageParams>,
) -> Result<Response, EdgeError> {
    let name = params
        .card
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(EdgeError::bad_request("Missing card"))?;

    let price = match params.price.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => Some(parse_price(raw).ok_or(EdgeError::bad_request("Invalid price"))?),
    };

    let card = OgCard {
        name: name.to_string(),
        price,
        ..Default::default()
    };
    render(&state, card).await
}

/// Accepts `12.5`, `$12.50` and `1,250.00`.
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

/// Rasterize on the blocking pool; rendering is CPU-bound.
async fn render(state: &AppState, card: OgCard) -> Result<Response, EdgeError> {
    let renderer = state.og.clone();
    let site_name = state.site.site_name.clone();

    let png = tokio::task::spawn_blocking(move || renderer.render_png(&card, &site_name))
        .await
        .map_err(|e| {
            warn!(error = %e, "preview render task failed");
            EdgeError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate image")
        })?
        .map_err(|e| {
            warn!(error = %e, "preview render failed");
            EdgeError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate image")
        })?;

    Ok(cached_body(og::CONTENT_TYPE, og::CACHE_CONTROL, png))
}
