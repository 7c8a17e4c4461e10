//! Shared fixtures for the router tests: an in-process mock of the upstream
//! API and helpers to drive the router with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get as route_get;
use axum::Router;
use cardpulse::{ApiClient, OgRenderer, SiteConfig};
use cardpulse_server::{router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Bind `upstream` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(upstream: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

/// Upstream that answers every request with a 500.
pub fn failing_upstream() -> Router {
    Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") })
}

/// Upstream serving a small fixed market.
///
/// Card 2 exists with history; card 3 exists but its history endpoint
/// fails; every other card id is a 404.
pub fn healthy_upstream() -> Router {
    market_routes().route(
        "/api/v1/blog/posts",
        route_get(|| async {
            Json(json!({ "data": [
                { "slug": "grading-guide", "title": "Grading", "published_at": "2024-12-01T08:00:00Z" }
            ]}))
        }),
    )
}

/// Same as [`healthy_upstream`] except the blog posts endpoint answers 500.
pub fn upstream_without_posts() -> Router {
    market_routes().route(
        "/api/v1/blog/posts",
        route_get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "posts offline") }),
    )
}

fn market_routes() -> Router {
    Router::new()
        .route("/api/v1/cards", route_get(|| async { Json(cards_fixture()) }))
        .route("/api/v1/cards/{id}", route_get(card_detail))
        .route("/api/v1/cards/{id}/history", route_get(card_history))
        .route(
            "/api/v1/cards/{id}/treatments",
            route_get(|| async {
                Json(json!([
                    { "treatment": "Classic Paper", "floor_price": 12.5, "sales_count": 4 },
                    { "treatment": "Classic Foil", "floor_price": 48.0, "sales_count": 1 }
                ]))
            }),
        )
        .route(
            "/api/v1/market/overview",
            route_get(|| async {
                Json(json!({
                    "total_cards": 2,
                    "total_volume": 5,
                    "dollar_volume": 62.5,
                    "avg_price_delta": -5.0
                }))
            }),
        )
        .route(
            "/api/v1/blog/weekly-movers",
            route_get(|| async {
                Json(json!([
                    { "date": "2025-01-06", "title": "Movers & Shakers", "top_gainer": "Storm Caller" },
                    { "date": "2025-01-13" }
                ]))
            }),
        )
}

pub fn cards_fixture() -> Value {
    json!([
        { "id": 1, "name": "Quiet Sentinel", "set_name": "Existence", "latest_price": 4.0, "volume": 0, "price_delta": 5.0 },
        { "id": 2, "name": "Storm Caller", "set_name": "Existence", "latest_price": 12.5, "floor_price": 11.0,
          "volume": 5, "price_delta": -10.0, "dollar_volume": 62.5, "deal_rating": -8.0 }
    ])
}

async fn card_detail(Path(id): Path<i64>) -> Response {
    match id {
        2 => Json(json!({
            "id": 2,
            "name": "Storm & Caller",
            "set_name": "Existence",
            "floor_price": 11.0,
            "latest_price": 12.5,
            "volume": 5,
            "price_delta": -10.0
        }))
        .into_response(),
        3 => Json(json!({ "id": 3, "name": "Historyless", "latest_price": 2.0 })).into_response(),
        _ => (StatusCode::NOT_FOUND, "no such card").into_response(),
    }
}

async fn card_history(
    Path(id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !params.contains_key("time_period") {
        return (StatusCode::BAD_REQUEST, "time_period is required").into_response();
    }
    if id == 3 {
        return (StatusCode::INTERNAL_SERVER_ERROR, "history offline").into_response();
    }
    Json(json!({ "data": [
        { "date": "2025-03-03T00:00:00Z", "price": 12.0 },
        { "date": "2025-03-01T00:00:00Z", "price": 14.0 },
        { "date": "2025-03-02T00:00:00Z", "price": 13.0 }
    ]}))
    .into_response()
}

/// Router under test, pointed at the upstream at `base_url`.
pub fn app(base_url: &str) -> Router {
    let site = SiteConfig {
        site_name: "CardPulse".to_string(),
        site_url: "https://example.test".to_string(),
        description: "Card prices".to_string(),
        api_url: base_url.to_string(),
    };
    let client = ApiClient::builder().base_url(base_url).build().unwrap();
    router(Arc::new(AppState {
        client,
        site,
        og: OgRenderer::without_fonts(),
    }))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> &str {
        self.headers.get(name).unwrap().to_str().unwrap()
    }
}

pub async fn send(app: Router, req: Request<Body>) -> TestResponse {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> TestResponse {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}
