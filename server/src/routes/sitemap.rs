use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use cardpulse::sitemap::{self, SitemapSources, MAX_CARD_URLS};
use chrono::Utc;
use tracing::warn;

use super::cached_body;
use crate::state::AppState;

/// GET /sitemap.xml
///
/// Fetches reports, posts and card ids concurrently. A failed source is
/// left out; when every source fails only the static pages are listed.
pub async fn get_sitemap(State(state): State<Arc<AppState>>) -> Response {
    let today = Utc::now().date_naive();
    let (movers, posts, card_ids) = tokio::join!(
        state.client.weekly_movers(),
        state.client.blog_posts(),
        state.client.card_ids_for_sitemap(MAX_CARD_URLS),
    );

    if movers.is_err() && posts.is_err() && card_ids.is_err() {
        warn!("all sitemap sources unavailable, serving fallback sitemap");
        let body = sitemap::fallback_sitemap(&state.site, today);
        return cached_body(sitemap::CONTENT_TYPE, sitemap::CACHE_CONTROL, body);
    }

    let sources = SitemapSources {
        weekly_movers: movers.unwrap_or_else(|e| {
            warn!(error = %e, "weekly movers unavailable for sitemap");
            Vec::new()
        }),
        posts: posts.unwrap_or_else(|e| {
            warn!(error = %e, "blog posts unavailable for sitemap");
            Vec::new()
        }),
        card_ids: card_ids.unwrap_or_else(|e| {
            warn!(error = %e, "card list unavailable for sitemap");
            Vec::new()
        }),
    };

    let body = sitemap::render_sitemap(&state.site, &sources, today);
    cached_body(sitemap::CONTENT_TYPE, sitemap::CACHE_CONTROL, body)
}
