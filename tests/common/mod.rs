//! Shared fixtures for the CardPulse integration tests.

#![allow(dead_code)]

use cardpulse::models::CardMarketRecord;

/// Record with sales volume, price and delta set; everything else zeroed.
pub fn record(id: i64, volume: u64, price: f64, delta: f64) -> CardMarketRecord {
    let mut r = CardMarketRecord::new(id, format!("Card {id}"));
    r.set_name = "Existence".to_string();
    r.volume = volume;
    r.latest_price = price;
    r.avg_price = price;
    r.price_delta = delta;
    r.dollar_volume = price * volume as f64;
    r
}

pub fn with_deal(mut r: CardMarketRecord, deal_rating: f64) -> CardMarketRecord {
    r.deal_rating = deal_rating;
    r
}

/// A small market covering every bucket of every histogram.
pub fn sample_market() -> Vec<CardMarketRecord> {
    vec![
        with_deal(record(1, 0, 4.0, 5.0), -30.0),
        with_deal(record(2, 5, 8.0, -10.0), -25.0),
        with_deal(record(3, 12, 18.0, 3.5), -8.0),
        with_deal(record(4, 1, 30.0, 40.0), 0.0),
        with_deal(record(5, 3, 42.0, 150.0), 2.0),
        with_deal(record(6, 7, 75.0, -1.0), 12.0),
        with_deal(record(7, 2, 120.0, -45.0), 33.0),
        with_deal(record(8, 9, 260.0, 12.0), -3.0),
        with_deal(record(9, 4, 0.0, 0.0), 0.0),
    ]
}
