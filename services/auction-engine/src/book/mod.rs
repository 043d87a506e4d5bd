//! Price book module
//!
//! Contains the per-side price buckets and the aggregator that fills them.

pub mod price_bucket;
pub mod aggregator;

pub use price_bucket::PriceBucket;
pub use aggregator::{AggregatedBook, PriceBookAggregator};
