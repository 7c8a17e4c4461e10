//! Portfolio valuation against the current market record set.
//!
//! Holdings are supplied by the caller; nothing here is persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::CardMarketRecord;

/// Cards of one kind the user owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub card_id: i64,
    pub quantity: u32,
    /// Price paid per copy.
    #[serde(default)]
    pub purchase_price: f64,
    #[serde(default)]
    pub treatment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionValue {
    pub card_id: i64,
    pub name: String,
    pub treatment: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    pub cost_basis: f64,
    pub market_value: f64,
    pub unrealized_pnl: f64,
    /// `None` when the position cost nothing.
    pub pnl_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub positions: Vec<PositionValue>,
    pub total_cost: f64,
    pub total_value: f64,
    pub total_pnl: f64,
    pub pnl_pct: Option<f64>,
    /// Card ids with no market record; excluded from every total.
    pub unpriced: Vec<i64>,
}

/// Value `holdings` at each card's market price (floor, else latest sale).
///
/// A holding matches a record by card id, and by treatment when the
/// holding names one and a record with that treatment exists. Positions
/// keep the order of `holdings`; zero-quantity holdings are skipped.
pub fn value_portfolio(holdings: &[Holding], records: &[CardMarketRecord]) -> PortfolioSummary {
    let mut by_id: HashMap<i64, Vec<&CardMarketRecord>> = HashMap::new();
    for r in records {
        by_id.entry(r.id).or_default().push(r);
    }

    let mut summary = PortfolioSummary::default();

    for h in holdings.iter().filter(|h| h.quantity > 0) {
        let Some(record) = by_id.get(&h.card_id).and_then(|rs| pick_record(rs, h)) else {
            if !summary.unpriced.contains(&h.card_id) {
                summary.unpriced.push(h.card_id);
            }
            continue;
        };

        let qty = f64::from(h.quantity);
        let unit_price = record.market_price();
        let cost_basis = h.purchase_price.max(0.0) * qty;
        let market_value = unit_price * qty;
        let unrealized_pnl = market_value - cost_basis;

        summary.total_cost += cost_basis;
        summary.total_value += market_value;
        summary.positions.push(PositionValue {
            card_id: h.card_id,
            name: record.name.clone(),
            treatment: h.treatment.clone().or_else(|| record.treatment.clone()),
            quantity: h.quantity,
            unit_price,
            cost_basis,
            market_value,
            unrealized_pnl,
            pnl_pct: pct(unrealized_pnl, cost_basis),
        });
    }

    summary.total_pnl = summary.total_value - summary.total_cost;
    summary.pnl_pct = pct(summary.total_pnl, summary.total_cost);
    summary
}

fn pick_record<'a>(candidates: &[&'a CardMarketRecord], holding: &Holding) -> Option<&'a CardMarketRecord> {
    if let Some(wanted) = &holding.treatment {
        if let Some(r) = candidates
            .iter()
            .copied()
            .find(|r| r.treatment.as_deref().is_some_and(|t| t.eq_ignore_ascii_case(wanted)))
        {
            return Some(r);
        }
    }
    candidates.first().copied()
}

fn pct(part: f64, whole: f64) -> Option<f64> {
    (whole > 0.0).then(|| part / whole * 100.0)
}
