use cardpulse::{ApiClient, OgRenderer, SiteConfig};

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Client for the upstream market-data API.
    pub client: ApiClient,

    /// Site name, URL and description used by the feed, sitemap and images.
    pub site: SiteConfig,

    /// Preview image rasterizer with its font database loaded once at startup.
    pub og: OgRenderer,
}
