use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PricePoint;

// ---------------------------------------------------------------------------
// PriceTrend: Aggregated price trend data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriceTrend {
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    pub first_date: Option<DateTime<Utc>>,
    pub last_date: Option<DateTime<Utc>>,
    pub data_points: usize,
    /// Percent change from the first to the last point, `None` when the
    /// series has fewer than two points or starts at zero.
    pub change_pct: Option<f64>,
}

impl PriceTrend {
    /// Summarize a price history. Points are ordered by date before the
    /// first/last comparison; an empty history yields an all-zero trend.
    pub fn from_history(history: &[PricePoint]) -> Self {
        let mut points: Vec<&PricePoint> = history.iter().filter(|p| p.price.is_finite()).collect();
        points.sort_by_key(|p| p.date);

        if points.is_empty() {
            return Self {
                min_price: 0.0,
                max_price: 0.0,
                avg_price: 0.0,
                first_date: None,
                last_date: None,
                data_points: 0,
                change_pct: None,
            };
        }

        let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
        let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg_price = prices.iter().sum::<f64>() / prices.len() as f64;

        let first = prices[0];
        let last = prices[prices.len() - 1];
        let change_pct = if prices.len() >= 2 && first > 0.0 {
            Some((last - first) / first * 100.0)
        } else {
            None
        };

        Self {
            min_price,
            max_price,
            avg_price,
            first_date: points.first().map(|p| p.date),
            last_date: points.last().map(|p| p.date),
            data_points: points.len(),
            change_pct,
        }
    }
}
