use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use cardpulse::feed;
use chrono::Utc;
use tracing::warn;

use super::cached_body;
use crate::state::AppState;

/// GET /feed.xml
///
/// Weekly movers as RSS. Any upstream failure yields the empty fallback
/// channel with a 200, so feed readers never see an error.
pub async fn get_feed(State(state): State<Arc<AppState>>) -> Response {
    let now = Utc::now();
    let body = match state.client.weekly_movers().await {
        Ok(reports) => feed::render_rss(&state.site, &reports, now),
        Err(e) => {
            warn!(error = %e, "weekly movers unavailable, serving fallback feed");
            feed::fallback_rss(&state.site, now)
        }
    };
    cached_body(feed::CONTENT_TYPE, feed::CACHE_CONTROL, body)
}
