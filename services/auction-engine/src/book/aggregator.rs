//! Limit order aggregation
//!
//! Folds every limit order into its side's bucket keyed by the
//! tick-normalized price. Raw prices that sit noticeably off their tick are
//! reported as precision-loss advisories but still aggregated.

use auction_types::errors::OrderError;
use auction_types::numeric::{Price, Quantity, TickSize};
use auction_types::order::{LimitOrder, Side};
use rust_decimal::Decimal;
use tracing::debug;

use super::price_bucket::PriceBucket;
use crate::classifier::{ClassifiedOrders, Sequenced};
use crate::config::EngineConfig;
use crate::error::{Advisory, AuctionError};

/// Output of the aggregation stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedBook {
    pub bids: PriceBucket,
    pub asks: PriceBucket,
    pub advisories: Vec<Advisory>,
}

/// Merges limit orders into per-side price buckets
#[derive(Debug, Clone, Copy)]
pub struct PriceBookAggregator {
    tick_size: TickSize,
    precision_tolerance: Decimal,
}

impl PriceBookAggregator {
    pub fn new(tick_size: TickSize, precision_tolerance: Decimal) -> Self {
        Self {
            tick_size,
            precision_tolerance,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.tick_size, config.precision_tolerance)
    }

    /// Aggregate both sides.
    ///
    /// The first invalid order aborts aggregation; no partial book is returned.
    pub fn aggregate(&self, classified: &ClassifiedOrders) -> Result<AggregatedBook, AuctionError> {
        let mut advisories = Vec::new();
        let bids = self.aggregate_side(Side::Buy, classified.limits(Side::Buy), &mut advisories)?;
        let asks = self.aggregate_side(Side::Sell, classified.limits(Side::Sell), &mut advisories)?;

        debug!(
            bid_levels = bids.level_count(),
            ask_levels = asks.level_count(),
            advisories = advisories.len(),
            "limit orders aggregated"
        );

        Ok(AggregatedBook {
            bids,
            asks,
            advisories,
        })
    }

    fn aggregate_side(
        &self,
        side: Side,
        orders: &[Sequenced<LimitOrder>],
        advisories: &mut Vec<Advisory>,
    ) -> Result<PriceBucket, AuctionError> {
        let mut bucket = PriceBucket::new(side);

        for entry in orders {
            self.validate(&entry.order, entry.position, advisories)
                .and_then(|(price, quantity)| bucket.add(price, quantity))
                .map_err(|source| AuctionError::LimitOrder {
                    side,
                    position: entry.position,
                    source,
                })?;
        }

        Ok(bucket)
    }

    /// Validate one order and return its bucket key and quantity
    fn validate(
        &self,
        order: &LimitOrder,
        position: usize,
        advisories: &mut Vec<Advisory>,
    ) -> Result<(Price, Quantity), OrderError> {
        // Reject the raw price first so a negative input is never reported
        // as its rounded value.
        Price::try_new(order.price)?;
        let quantity = Quantity::try_positive(order.quantity)?;

        let normalized = self
            .tick_size
            .normalize(order.price)
            .ok_or_else(|| OrderError::PriceOutOfRange {
                price: order.price.to_string(),
            })?;
        let price = Price::try_new(normalized)?;

        if (order.price - normalized).abs() > self.precision_tolerance {
            advisories.push(Advisory::PrecisionLoss {
                side: order.side,
                position,
                raw: order.price,
                normalized: price,
            });
        }

        Ok((price, quantity))
    }
}

impl Default for PriceBookAggregator {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
