#[derive(Debug, thiserror::Error)]
pub enum CardPulseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl CardPulseError {
    /// True when the error came from the upstream API (transport, status or decode)
    /// rather than from the caller's input or local rendering.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CardPulseError::Http(_) | CardPulseError::Status { .. } | CardPulseError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CardPulseError>;
