use std::sync::Arc;

use cardpulse::{ApiClient, OgRenderer};
use cardpulse_server::{router, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cardpulse=debug,cardpulse_server=debug")),
        )
        .init();

    let config = ServerConfig::from_env();
    let client = ApiClient::builder()
        .base_url(config.site.api_url.clone())
        .timeout(config.upstream_timeout)
        .build()
        .expect("Failed to build upstream API client");

    info!(
        api = %config.site.api_url,
        site = %config.site.site_url,
        "loading fonts for preview images"
    );
    let og = tokio::task::spawn_blocking(OgRenderer::with_system_fonts)
        .await
        .expect("Font loading task panicked");

    let state = Arc::new(AppState {
        client,
        site: config.site.clone(),
        og,
    });

    let app = router(state);

    info!("Listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
