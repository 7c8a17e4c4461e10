//! CardPulse web layer for Rust.
//!
//! Turns data from the upstream trading-card market API into the views the
//! site serves: dashboard aggregates (totals, top movers, distribution
//! buckets), portfolio valuations, the weekly-movers RSS feed, the sitemap
//! and Open Graph preview images. Pricing, scraping and persistence all live
//! in the upstream service; this crate only fetches, derives and formats.
//!
//! # Quick start
//!
//! ```no_run
//! use cardpulse::aggregates::{MarketFilter, MarketSnapshot};
//! use cardpulse::models::TimeFrame;
//! use cardpulse::ApiClient;
//!
//! # async fn example() -> cardpulse::Result<()> {
//! let client = ApiClient::builder().build()?;
//! let cards = client.cards(TimeFrame::Week).await?;
//!
//! let filter = MarketFilter::new(TimeFrame::Week, true);
//! let snapshot = MarketSnapshot::compute(&cards, &filter, 10);
//! println!("{} gainers, {} losers", snapshot.totals.gainers, snapshot.totals.losers);
//! # Ok(())
//! # }
//! ```

pub mod aggregates;
pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod og;
pub mod portfolio;
pub mod sitemap;
pub mod xml;

pub use aggregates::{MarketFilter, MarketSnapshot};
pub use client::{ApiClient, ApiClientBuilder};
pub use config::SiteConfig;
pub use error::{CardPulseError, Result};
pub use og::{OgCard, OgRenderer};
pub use portfolio::{value_portfolio, Holding, PortfolioSummary};
