use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::CardMarketRecord;

/// Card entry of a top-N list, carrying the effective (display) delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCard {
    pub id: i64,
    pub name: String,
    pub set_name: String,
    pub treatment: Option<String>,
    pub latest_price: f64,
    pub delta: f64,
    pub volume: u64,
    pub dollar_volume: f64,
}

impl From<&CardMarketRecord> for RankedCard {
    fn from(r: &CardMarketRecord) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            set_name: r.set_name.clone(),
            treatment: r.treatment.clone(),
            latest_price: r.latest_price,
            delta: r.effective_delta(),
            volume: r.volume,
            dollar_volume: r.dollar_volume,
        }
    }
}

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

/// Top-N lists of the market dashboard.
///
/// Every list is ordered by its key descending, ties by ascending card id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rankings {
    pub top_movers: Vec<RankedCard>,
    pub top_gainers: Vec<RankedCard>,
    pub top_losers: Vec<RankedCard>,
    pub most_active: Vec<RankedCard>,
    pub highest_value: Vec<RankedCard>,
    pub volume_leaders: Vec<RankedCard>,
}

impl Rankings {
    pub fn compute(records: &[&CardMarketRecord], n: usize) -> Self {
        Self {
            top_movers: top_n(records, n, |r| r.effective_delta() != 0.0, |r| {
                r.effective_delta().abs()
            }),
            top_gainers: top_n(records, n, |r| r.effective_delta() > 0.0, |r| {
                r.effective_delta()
            }),
            top_losers: top_n(records, n, |r| r.effective_delta() < 0.0, |r| {
                -r.effective_delta()
            }),
            most_active: top_n(records, n, |r| r.volume > 0, |r| r.volume as f64),
            highest_value: top_n(records, n, |r| r.latest_price > 0.0, |r| r.latest_price),
            volume_leaders: top_n(records, n, |r| r.dollar_volume > 0.0, |r| r.dollar_volume),
        }
    }
}

/// Keep records matching `include`, order by `key` descending then id
/// ascending, and take the first `n`.
pub fn top_n<F, K>(records: &[&CardMarketRecord], n: usize, include: F, key: K) -> Vec<RankedCard>
where
    F: Fn(&CardMarketRecord) -> bool,
    K: Fn(&CardMarketRecord) -> f64,
{
    let mut selected: Vec<(&CardMarketRecord, f64)> = records
        .iter()
        .copied()
        .filter(|r| include(*r))
        .map(|r| (r, key(r)))
        .filter(|(_, k)| k.is_finite())
        .collect();

    selected.sort_by(|(a, ka), (b, kb)| by_key_desc_then_id(*ka, a.id, *kb, b.id));

    selected
        .into_iter()
        .take(n)
        .map(|(r, _)| RankedCard::from(r))
        .collect()
}

fn by_key_desc_then_id(ka: f64, ida: i64, kb: f64, idb: i64) -> Ordering {
    kb.total_cmp(&ka).then_with(|| ida.cmp(&idb))
}
