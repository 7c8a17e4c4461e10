//! Derived market aggregates.
//!
//! Every function here is a pure transformation of a borrowed record slice
//! plus a [`MarketFilter`]. Nothing is cached between calls: dashboards call
//! [`MarketSnapshot::compute`] again whenever the record set or a filter
//! toggle changes.
//!
//! # Example
//!
//! ```rust
//! use cardpulse::aggregates::{MarketFilter, MarketSnapshot};
//! use cardpulse::models::CardMarketRecord;
//!
//! let mut rec = CardMarketRecord::new(1, "Storm Caller");
//! rec.volume = 4;
//! rec.price_delta = 12.5;
//!
//! let snapshot = MarketSnapshot::compute(&[rec], &MarketFilter::default(), 10);
//! assert_eq!(snapshot.totals.gainers, 1);
//! ```

pub mod histogram;
pub mod rankings;
pub mod totals;

pub use histogram::{Bucket, Histogram, HistogramKind};
pub use rankings::{RankedCard, Rankings};
pub use totals::{MarketSentiment, MarketTotals};

use serde::{Deserialize, Serialize};

use crate::models::{CardMarketRecord, TimeFrame};

// ---------------------------------------------------------------------------
// MarketFilter
// ---------------------------------------------------------------------------

/// Filter state of a dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarketFilter {
    /// Window the records were fetched for.
    #[serde(default)]
    pub time_frame: TimeFrame,
    /// Drop records with no sales in the window before aggregating.
    #[serde(default)]
    pub hide_low_signal: bool,
}

impl MarketFilter {
    pub fn new(time_frame: TimeFrame, hide_low_signal: bool) -> Self {
        Self {
            time_frame,
            hide_low_signal,
        }
    }
}

/// Apply the filter toggles, preserving input order.
pub fn filter_records<'a>(
    records: &'a [CardMarketRecord],
    filter: &MarketFilter,
) -> Vec<&'a CardMarketRecord> {
    records
        .iter()
        .filter(|r| !filter.hide_low_signal || r.volume > 0)
        .collect()
}

// ---------------------------------------------------------------------------
// MarketSnapshot
// ---------------------------------------------------------------------------

/// Everything the market dashboard renders, derived from one record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub filter: MarketFilter,
    pub totals: MarketTotals,
    pub rankings: Rankings,
    pub price_tiers: Histogram,
    pub deal_ratings: Histogram,
    pub sentiment: Histogram,
}

impl MarketSnapshot {
    /// Filter `records` and compute every view from the filtered set.
    pub fn compute(records: &[CardMarketRecord], filter: &MarketFilter, top_n: usize) -> Self {
        let filtered = filter_records(records, filter);

        Self {
            filter: *filter,
            totals: MarketTotals::compute(&filtered),
            rankings: Rankings::compute(&filtered, top_n),
            price_tiers: Histogram::compute(HistogramKind::PriceTier, &filtered),
            deal_ratings: Histogram::compute(HistogramKind::DealRating, &filtered),
            sentiment: Histogram::compute(HistogramKind::Sentiment, &filtered),
        }
    }
}
