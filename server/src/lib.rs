//! HTTP surface of CardPulse: dashboard JSON API plus the edge routes
//! (RSS feed, sitemap, preview images).

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use state::AppState;

/// Build the application router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(routes::meta::healthz))
        .route("/feed.xml", get(routes::feed::get_feed))
        .route("/rss.xml", get(routes::feed::get_feed))
        .route("/sitemap.xml", get(routes::sitemap::get_sitemap))
        .route("/api/og", get(routes::og::card_image))
        .route("/api/og/share", get(routes::og::share_image))
        .route("/api/dashboard", get(routes::dashboard::get_dashboard))
        .route("/api/market/overview", get(routes::meta::market_overview))
        .route("/api/cards/{id}", get(routes::cards::get_card))
        .route("/api/portfolio/value", post(routes::portfolio::value_holdings))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
