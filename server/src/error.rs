use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use cardpulse::CardPulseError;
use serde_json::json;
use tracing::warn;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<CardPulseError> for AppError {
    fn from(e: CardPulseError) -> Self {
        match &e {
            CardPulseError::NotFound(msg) => AppError::not_found(msg.clone()),
            CardPulseError::InvalidArgument(msg) => AppError::bad_request(msg.clone()),
            _ if e.is_upstream() => {
                warn!(error = %e, "upstream request failed");
                AppError::bad_gateway(format!("Upstream API unavailable: {e}"))
            }
            _ => AppError::internal(e.to_string()),
        }
    }
}

/// Error of the edge routes (images), rendered as a plain-text body.
#[derive(Debug)]
pub struct EdgeError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl EdgeError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for EdgeError {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message,
        )
            .into_response()
    }
}
