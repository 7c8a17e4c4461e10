use serde::{Deserialize, Serialize};

use super::rankings::RankedCard;
use crate::models::CardMarketRecord;

// ---------------------------------------------------------------------------
// Bucket layouts
// ---------------------------------------------------------------------------

/// A fixed half-open range `[min, max)`; `None` leaves that side unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketSpec {
    pub label: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl BucketSpec {
    const fn new(label: &'static str, min: Option<f64>, max: Option<f64>) -> Self {
        Self { label, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |lo| value >= lo) && self.max.map_or(true, |hi| value < hi)
    }
}

const PRICE_TIERS: [BucketSpec; 5] = [
    BucketSpec::new("$0-10", None, Some(10.0)),
    BucketSpec::new("$10-25", Some(10.0), Some(25.0)),
    BucketSpec::new("$25-50", Some(25.0), Some(50.0)),
    BucketSpec::new("$50-100", Some(50.0), Some(100.0)),
    BucketSpec::new("$100+", Some(100.0), None),
];

const DEAL_RANGES: [BucketSpec; 5] = [
    BucketSpec::new("Great deal", None, Some(-20.0)),
    BucketSpec::new("Good deal", Some(-20.0), Some(-5.0)),
    BucketSpec::new("Fair", Some(-5.0), Some(5.0)),
    BucketSpec::new("Above average", Some(5.0), Some(20.0)),
    BucketSpec::new("Overpriced", Some(20.0), None),
];

const SENTIMENT_RANGES: [BucketSpec; 5] = [
    BucketSpec::new("Strong sell-off", None, Some(-10.0)),
    BucketSpec::new("Cooling", Some(-10.0), Some(-2.0)),
    BucketSpec::new("Stable", Some(-2.0), Some(2.0)),
    BucketSpec::new("Heating up", Some(2.0), Some(10.0)),
    BucketSpec::new("Surging", Some(10.0), None),
];

/// Which distribution a [`Histogram`] shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistogramKind {
    /// Latest sale price, over cards with a positive price.
    PriceTier,
    /// Deal rating, over cards with sales and a non-zero rating.
    DealRating,
    /// Effective price delta, over cards with sales.
    Sentiment,
}

impl HistogramKind {
    pub fn buckets(&self) -> &'static [BucketSpec] {
        match self {
            HistogramKind::PriceTier => &PRICE_TIERS,
            HistogramKind::DealRating => &DEAL_RANGES,
            HistogramKind::Sentiment => &SENTIMENT_RANGES,
        }
    }

    /// Whether a record takes part in this distribution at all.
    pub fn includes(&self, r: &CardMarketRecord) -> bool {
        match self {
            HistogramKind::PriceTier => r.latest_price.is_finite() && r.latest_price > 0.0,
            HistogramKind::DealRating => {
                r.volume > 0 && r.deal_rating.is_finite() && r.deal_rating != 0.0
            }
            HistogramKind::Sentiment => r.volume > 0,
        }
    }

    /// Value that decides the bucket.
    pub fn value(&self, r: &CardMarketRecord) -> f64 {
        match self {
            HistogramKind::PriceTier => r.latest_price,
            HistogramKind::DealRating => r.deal_rating,
            HistogramKind::Sentiment => r.effective_delta(),
        }
    }

    /// Magnitude used to pick a bucket's representative card.
    pub fn deviation(&self, r: &CardMarketRecord) -> f64 {
        match self {
            HistogramKind::PriceTier | HistogramKind::Sentiment => r.effective_delta().abs(),
            HistogramKind::DealRating => r.deal_rating.abs(),
        }
    }
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub count: usize,
    /// Share of the histogram's total, in percent.
    pub share: f64,
    /// Member with the largest deviation, lowest id on ties.
    pub top: Option<RankedCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub kind: HistogramKind,
    /// Number of records that passed the kind's predicate.
    pub total: usize,
    pub buckets: Vec<Bucket>,
}

impl Histogram {
    pub fn compute(kind: HistogramKind, records: &[&CardMarketRecord]) -> Self {
        let specs = kind.buckets();
        let mut counts = vec![0usize; specs.len()];
        let mut tops: Vec<Option<(&CardMarketRecord, f64)>> = vec![None; specs.len()];
        let mut total = 0;

        for &r in records.iter().filter(|r| kind.includes(r)) {
            let value = kind.value(r);
            let Some(idx) = specs.iter().position(|s| s.contains(value)) else {
                continue;
            };
            total += 1;
            counts[idx] += 1;

            let dev = kind.deviation(r);
            let replace = match tops[idx] {
                None => true,
                Some((best, best_dev)) => dev > best_dev || (dev == best_dev && r.id < best.id),
            };
            if replace {
                tops[idx] = Some((r, dev));
            }
        }

        let buckets = specs
            .iter()
            .zip(counts)
            .zip(tops)
            .map(|((spec, count), top)| Bucket {
                label: spec.label.to_string(),
                min: spec.min,
                max: spec.max,
                count,
                share: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                },
                top: top.map(|(r, _)| RankedCard::from(r)),
            })
            .collect();

        Self {
            kind,
            total,
            buckets,
        }
    }

    /// Sum of the bucket counts; equals [`total`](Self::total).
    pub fn counted(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}
