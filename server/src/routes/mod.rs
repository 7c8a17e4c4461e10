pub mod cards;
pub mod dashboard;
pub mod feed;
pub mod meta;
pub mod og;
pub mod portfolio;
pub mod sitemap;

use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};

/// 200 response with the given content type and cache policy.
pub(crate) fn cached_body(
    content_type: &'static str,
    cache_control: &'static str,
    body: impl Into<Body>,
) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, cache_control),
        ],
        body.into(),
    )
        .into_response()
}
