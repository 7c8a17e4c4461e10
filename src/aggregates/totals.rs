use serde::{Deserialize, Serialize};

use crate::models::CardMarketRecord;

/// Breadth above which the market reads as bullish (and below the negation, bearish).
pub const SENTIMENT_BREADTH_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSentiment {
    Bullish,
    Neutral,
    Bearish,
}

impl MarketSentiment {
    pub fn from_breadth(breadth: f64) -> Self {
        if breadth > SENTIMENT_BREADTH_THRESHOLD {
            MarketSentiment::Bullish
        } else if breadth < -SENTIMENT_BREADTH_THRESHOLD {
            MarketSentiment::Bearish
        } else {
            MarketSentiment::Neutral
        }
    }
}

// ---------------------------------------------------------------------------
// MarketTotals
// ---------------------------------------------------------------------------

/// Sums and averages over the filtered record set.
///
/// Gainers, losers and unchanged are split by the sign of the effective
/// delta, so low-volume cards always count as unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTotals {
    pub count: usize,
    pub total_volume: u64,
    pub total_dollar_volume: f64,
    pub avg_price: f64,
    pub avg_delta: f64,
    pub gainers: usize,
    pub losers: usize,
    pub unchanged: usize,
    /// `(gainers - losers) / count * 100`, zero for an empty set.
    pub breadth: f64,
    pub sentiment: MarketSentiment,
}

impl MarketTotals {
    pub fn compute(records: &[&CardMarketRecord]) -> Self {
        let count = records.len();
        let mut total_volume = 0u64;
        let mut total_dollar_volume = 0.0;
        let mut price_sum = 0.0;
        let mut delta_sum = 0.0;
        let mut gainers = 0;
        let mut losers = 0;
        let mut unchanged = 0;

        for r in records {
            total_volume = total_volume.saturating_add(r.volume);
            if r.dollar_volume.is_finite() {
                total_dollar_volume += r.dollar_volume;
            }
            if r.latest_price.is_finite() {
                price_sum += r.latest_price;
            }

            let delta = r.effective_delta();
            delta_sum += delta;
            if delta > 0.0 {
                gainers += 1;
            } else if delta < 0.0 {
                losers += 1;
            } else {
                unchanged += 1;
            }
        }

        let (avg_price, avg_delta, breadth) = if count == 0 {
            (0.0, 0.0, 0.0)
        } else {
            let n = count as f64;
            (
                price_sum / n,
                delta_sum / n,
                (gainers as f64 - losers as f64) / n * 100.0,
            )
        };

        Self {
            count,
            total_volume,
            total_dollar_volume,
            avg_price,
            avg_delta,
            gainers,
            losers,
            unchanged,
            breadth,
            sentiment: MarketSentiment::from_breadth(breadth),
        }
    }
}
