use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::market::display_delta;
use super::null_as_default;

// ---------------------------------------------------------------------------
// CardDetail: a single card as served by the card detail endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub floor_price: Option<f64>,
    #[serde(default)]
    pub latest_price: Option<f64>,
    #[serde(default)]
    pub lowest_ask: Option<f64>,
    #[serde(default)]
    pub vwap: Option<f64>,
    #[serde(default)]
    pub fair_market_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_delta: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CardDetail {
    /// Best single price to headline the card with: FMP, then floor,
    /// then VWAP, then the latest sale.
    pub fn headline_price(&self) -> Option<f64> {
        [
            self.fair_market_price,
            self.floor_price,
            self.vwap,
            self.latest_price,
        ]
        .into_iter()
        .flatten()
        .find(|p| *p > 0.0)
    }

    /// Price delta under the same signal and clamp rules as market records.
    pub fn effective_delta(&self) -> f64 {
        display_delta(self.price_delta, self.volume)
    }
}

// ---------------------------------------------------------------------------
// PricePoint: one entry of a card's sale history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: DateTime<Utc>,
    pub price: f64,
    #[serde(default)]
    pub treatment: Option<String>,
}

// ---------------------------------------------------------------------------
// TreatmentFloor: floor price per printing treatment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentFloor {
    pub treatment: String,
    #[serde(default)]
    pub floor_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sales_count: u64,
}

// ---------------------------------------------------------------------------
// MarketOverview: site-wide summary for a time frame
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOverview {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_cards: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_volume: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dollar_volume: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_price_delta: f64,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
