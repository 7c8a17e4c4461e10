use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::error::CardPulseError;

/// Largest magnitude of a price delta that is shown or aggregated.
pub const MAX_DELTA_PCT: f64 = 100.0;

/// Fewest sales in a window for its price delta to count as a signal.
pub const MIN_SIGNAL_VOLUME: u64 = 2;

/// Delta as it may be shown: zero below [`MIN_SIGNAL_VOLUME`] sales or when
/// not finite, otherwise clamped to `[-MAX_DELTA_PCT, MAX_DELTA_PCT]`.
pub fn display_delta(price_delta: f64, volume: u64) -> f64 {
    if volume < MIN_SIGNAL_VOLUME || !price_delta.is_finite() {
        return 0.0;
    }
    price_delta.clamp(-MAX_DELTA_PCT, MAX_DELTA_PCT)
}

// ---------------------------------------------------------------------------
// TimeFrame: lookback window of a market query
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFrame {
    #[serde(rename = "24h", alias = "1d")]
    Day,
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "all")]
    All,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 5] = [
        TimeFrame::Day,
        TimeFrame::Week,
        TimeFrame::Month,
        TimeFrame::Quarter,
        TimeFrame::All,
    ];

    /// Query-string value understood by the upstream API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrame::Day => "24h",
            TimeFrame::Week => "7d",
            TimeFrame::Month => "30d",
            TimeFrame::Quarter => "90d",
            TimeFrame::All => "all",
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFrame {
    type Err = CardPulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "1d" => Ok(TimeFrame::Day),
            "7d" => Ok(TimeFrame::Week),
            "30d" => Ok(TimeFrame::Month),
            "90d" => Ok(TimeFrame::Quarter),
            "all" => Ok(TimeFrame::All),
            other => Err(CardPulseError::InvalidArgument(format!(
                "Unknown time period '{other}' (expected one of 24h, 7d, 30d, 90d, all)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// CardMarketRecord: one tracked card within a time window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardMarketRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub rarity_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latest_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_price: f64,
    #[serde(default)]
    pub floor_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume_change: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_delta: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dollar_volume: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deal_rating: f64,
    #[serde(default)]
    pub treatment: Option<String>,
}

impl CardMarketRecord {
    /// Minimal record with the given identity; every metric starts at zero.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            set_name: String::new(),
            rarity_id: None,
            latest_price: 0.0,
            avg_price: 0.0,
            floor_price: None,
            volume: 0,
            volume_change: 0.0,
            price_delta: 0.0,
            dollar_volume: 0.0,
            deal_rating: 0.0,
            treatment: None,
        }
    }

    /// Whether enough sales happened in the window for the delta to mean anything.
    pub fn has_signal(&self) -> bool {
        self.volume >= MIN_SIGNAL_VOLUME
    }

    /// Price delta as displayed and aggregated.
    ///
    /// Forced to zero below [`MIN_SIGNAL_VOLUME`] sales, otherwise clamped
    /// to `[-MAX_DELTA_PCT, MAX_DELTA_PCT]`.
    pub fn effective_delta(&self) -> f64 {
        display_delta(self.price_delta, self.volume)
    }

    /// Floor price when the upstream computed one, else the latest sale.
    pub fn market_price(&self) -> f64 {
        match self.floor_price {
            Some(floor) if floor > 0.0 => floor,
            _ => self.latest_price,
        }
    }
}
