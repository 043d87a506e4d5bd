//! Order classification
//!
//! Stable partition of the input orders by (type × side). Every classified
//! order remembers its position in the caller's input so later stages can
//! report exactly which order failed.

use auction_types::order::{LimitOrder, MarketOrder, Order, OrderRecord, Side};
use serde::{Deserialize, Serialize};

use crate::error::AuctionError;

/// An order tagged with its position in the input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequenced<T> {
    pub position: usize,
    pub order: T,
}

/// The four disjoint order groups of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedOrders {
    pub buy_limits: Vec<Sequenced<LimitOrder>>,
    pub sell_limits: Vec<Sequenced<LimitOrder>>,
    pub buy_markets: Vec<Sequenced<MarketOrder>>,
    pub sell_markets: Vec<Sequenced<MarketOrder>>,
}

impl ClassifiedOrders {
    /// Limit orders of one side, in input order
    pub fn limits(&self, side: Side) -> &[Sequenced<LimitOrder>] {
        match side {
            Side::Buy => &self.buy_limits,
            Side::Sell => &self.sell_limits,
        }
    }

    /// Market orders of one side, in input order
    pub fn markets(&self, side: Side) -> &[Sequenced<MarketOrder>] {
        match side {
            Side::Buy => &self.buy_markets,
            Side::Sell => &self.sell_markets,
        }
    }

    /// Total number of classified orders
    pub fn len(&self) -> usize {
        self.buy_limits.len() + self.sell_limits.len() + self.buy_markets.len() + self.sell_markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_limit(&mut self, position: usize, order: LimitOrder) {
        let group = match order.side {
            Side::Buy => &mut self.buy_limits,
            Side::Sell => &mut self.sell_limits,
        };
        group.push(Sequenced { position, order });
    }

    fn push_market(&mut self, position: usize, order: MarketOrder) {
        let group = match order.side {
            Side::Buy => &mut self.buy_markets,
            Side::Sell => &mut self.sell_markets,
        };
        group.push(Sequenced { position, order });
    }

    fn push(&mut self, position: usize, order: Order) {
        match order {
            Order::Limit(limit) => self.push_limit(position, limit),
            Order::Market(market) => self.push_market(position, market),
        }
    }
}

/// Classify separate limit and market collections.
///
/// Limit and market positions are numbered independently.
pub fn classify(limits: &[LimitOrder], markets: &[MarketOrder]) -> ClassifiedOrders {
    let mut classified = ClassifiedOrders::default();
    for (position, order) in limits.iter().enumerate() {
        classified.push_limit(position, *order);
    }
    for (position, order) in markets.iter().enumerate() {
        classified.push_market(position, *order);
    }
    classified
}

/// Classify a single mixed order stream.
pub fn classify_orders(orders: &[Order]) -> ClassifiedOrders {
    let mut classified = ClassifiedOrders::default();
    for (position, order) in orders.iter().enumerate() {
        classified.push(position, *order);
    }
    classified
}

/// Classify loosely typed records.
///
/// The first record with an unknown side (or a non-finite number) aborts
/// classification; nothing is skipped.
pub fn classify_records(records: &[OrderRecord]) -> Result<ClassifiedOrders, AuctionError> {
    let mut classified = ClassifiedOrders::default();
    for (position, record) in records.iter().enumerate() {
        let order = Order::try_from(record)
            .map_err(|source| AuctionError::Classification { position, source })?;
        classified.push(position, order);
    }
    Ok(classified)
}
