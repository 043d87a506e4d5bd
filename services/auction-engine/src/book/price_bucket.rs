//! Per-side price bucket
//!
//! Maps a tick-normalized price to the net resting limit quantity at that
//! price. Uses BTreeMap for deterministic iteration; values are running
//! sums and are never decremented. The side total is kept alongside the
//! levels so that every cumulative walk over the bucket stays in range.

use std::collections::BTreeMap;

use auction_types::errors::OrderError;
use auction_types::numeric::{Price, Quantity};
use auction_types::order::Side;
use serde::{Deserialize, Serialize};

/// Resting limit liquidity for one side of the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucket {
    side: Side,
    /// Price levels, ascending
    levels: BTreeMap<Price, Quantity>,
    total: Quantity,
}

impl PriceBucket {
    /// Create a new empty bucket for the given side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            total: Quantity::zero(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Add quantity at a price, creating the level if absent.
    ///
    /// Fails without touching the bucket if the side total would leave the
    /// decimal range.
    pub fn add(&mut self, price: Price, quantity: Quantity) -> Result<(), OrderError> {
        let overflow = || OrderError::QuantityOverflow {
            quantity: quantity.to_string(),
        };
        let total = self.total.checked_add(quantity).ok_or_else(overflow)?;
        let level = self
            .get(&price)
            .unwrap_or_default()
            .checked_add(quantity)
            .ok_or_else(overflow)?;

        self.levels.insert(price, level);
        self.total = total;
        Ok(())
    }

    /// Quantity resting at an exact price
    pub fn get(&self, price: &Price) -> Option<Quantity> {
        self.levels.get(price).copied()
    }

    /// Best price of this side: highest for bids, lowest for asks
    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Levels in ascending price order
    pub fn ascending(&self) -> impl DoubleEndedIterator<Item = (Price, Quantity)> + '_ {
        self.levels.iter().map(|(price, quantity)| (*price, *quantity))
    }

    /// Levels in descending price order
    pub fn descending(&self) -> impl Iterator<Item = (Price, Quantity)> + '_ {
        self.ascending().rev()
    }

    /// Levels best-first: descending for bids, ascending for asks
    pub fn best_first(&self) -> Vec<(Price, Quantity)> {
        match self.side {
            Side::Buy => self.descending().collect(),
            Side::Sell => self.ascending().collect(),
        }
    }

    /// Sum of all resting quantity
    pub fn total_quantity(&self) -> Quantity {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
