//! Auction Engine
//!
//! Aggregates a static snapshot of limit and market orders into an auction
//! book: per-side price buckets, market volume, best quotes and cumulative
//! supply/demand curves.
//!
//! **Pipeline:**
//!
//! ```text
//! orders ─▶ classifier ─┬─▶ book::aggregator ──┬─▶ quotes
//!                       └─▶ market_volume ─────┴─▶ curve ─▶ BookSnapshot
//! ```
//!
//! **Key Invariants:**
//! - Every bucket price is the tick-normalized price of at least one limit order
//! - Bucket totals equal the limit quantity of their side
//! - Empty sides report `EmptyBookSide`, never a zero price
//! - Deterministic (same inputs → same snapshot and checksum)
//!
//! No trade matching is performed.

pub mod book;
pub mod classifier;
pub mod config;
pub mod curve;
pub mod engine;
pub mod error;
pub mod export;
pub mod market_volume;
pub mod quotes;
pub mod snapshot;

pub use config::EngineConfig;
pub use engine::AuctionEngine;
pub use error::{Advisory, AuctionError};
pub use snapshot::BookSnapshot;
