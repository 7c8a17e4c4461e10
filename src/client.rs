//! Async client for the upstream market-data REST API.
//!
//! Issues plain GET requests and decodes the JSON bodies into the crate's
//! models. There is no retry, backoff or caching layer; callers
//! decide how to degrade when a request fails.
//!
//! # Example
//!
//! ```no_run
//! use cardpulse::{ApiClient, models::TimeFrame};
//!
//! # async fn example() -> cardpulse::Result<()> {
//! let client = ApiClient::builder()
//!     .base_url("https://api.cardpulse.gg")
//!     .build()?;
//!
//! let cards = client.cards(TimeFrame::Week).await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::{self, API_PREFIX};
use crate::error::{CardPulseError, Result};
use crate::models::{
    BlogPost, CardDetail, CardMarketRecord, MarketOverview, PricePoint, TimeFrame,
    TreatmentFloor, WeeklyMoversReport,
};

// ---------------------------------------------------------------------------
// ApiClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`ApiClient`].
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(15),
            user_agent: format!("cardpulse/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiClientBuilder {
    /// Set the API origin, e.g. `https://api.cardpulse.gg`. Trailing slashes are dropped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout. Defaults to 15 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        if self.base_url.is_empty() {
            return Err(CardPulseError::InvalidArgument(
                "API base URL must not be empty".into(),
            ));
        }
        let http = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(ApiClient {
            http,
            base_url: self.base_url,
        })
    }
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Handle to the upstream API. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

/// List endpoints answer either with a bare array or with `{"data": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Enveloped { data: Vec<T> },
}

impl<T> ListBody<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            ListBody::Bare(items) | ListBody::Enveloped { data: items } => items,
        }
    }
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an API path (relative to the versioned prefix).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    // -- Market ------------------------------------------------------------

    /// Every tracked card with its metrics for the given window.
    pub async fn cards(&self, time_frame: TimeFrame) -> Result<Vec<CardMarketRecord>> {
        self.get_list("/cards", &[("time_period", time_frame.as_str())])
            .await
    }

    pub async fn market_overview(&self, time_frame: TimeFrame) -> Result<MarketOverview> {
        self.get_json("/market/overview", &[("time_period", time_frame.as_str())])
            .await
    }

    // -- Card detail -------------------------------------------------------

    /// A single card. A 404 from upstream becomes [`CardPulseError::NotFound`].
    pub async fn card(&self, id: i64) -> Result<CardDetail> {
        match self.get_json(&format!("/cards/{id}"), &[]).await {
            Err(CardPulseError::Status { status: 404, .. }) => {
                Err(CardPulseError::NotFound(format!("Card {id}")))
            }
            other => other,
        }
    }

    pub async fn card_history(&self, id: i64, time_frame: TimeFrame) -> Result<Vec<PricePoint>> {
        self.get_list(
            &format!("/cards/{id}/history"),
            &[("time_period", time_frame.as_str())],
        )
        .await
    }

    /// Floor price per treatment (foil, serialized, ...) of a card.
    pub async fn treatment_floors(&self, id: i64) -> Result<Vec<TreatmentFloor>> {
        self.get_list(&format!("/cards/{id}/treatments"), &[]).await
    }

    // -- Content -----------------------------------------------------------

    pub async fn weekly_movers(&self) -> Result<Vec<WeeklyMoversReport>> {
        self.get_list("/blog/weekly-movers", &[]).await
    }

    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.get_list("/blog/posts", &[]).await
    }

    /// Ids of every card with a detail page, capped at `limit`.
    pub async fn card_ids_for_sitemap(&self, limit: usize) -> Result<Vec<i64>> {
        let cards = self.cards(TimeFrame::All).await?;
        Ok(cards.into_iter().map(|c| c.id).take(limit).collect())
    }

    // -- Transport ---------------------------------------------------------

    async fn get_list<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<T>> {
        let body: ListBody<T> = self.get_json(path, query).await?;
        Ok(body.into_items())
    }

    /// GET `path` and decode the body, mapping non-2xx statuses to
    /// [`CardPulseError::Status`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path);
        debug!(%url, ?query, "upstream request");

        let resp = self.http.get(&url).query(query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            debug!(%url, status = status.as_u16(), "upstream error status");
            return Err(status_error(status, url));
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn status_error(status: StatusCode, url: String) -> CardPulseError {
    CardPulseError::Status {
        status: status.as_u16(),
        url,
    }
}
