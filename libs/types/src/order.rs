//! Order records
//!
//! Orders are immutable value records. A limit order carries its raw price
//! and quantity exactly as supplied; the engine validates and normalizes
//! them during aggregation so it can report which input failed.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::OrderError;
use crate::numeric::decimal_from_f64;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl FromStr for Side {
    type Err = OrderError;

    /// Only the exact strings `"buy"` and `"sell"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(OrderError::InvalidSide {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priced order resting at a limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrder {
    pub side: Side,
    pub price: Decimal,
    pub quantity: Decimal,
}

impl LimitOrder {
    pub fn new(side: Side, price: Decimal, quantity: Decimal) -> Self {
        Self {
            side,
            price,
            quantity,
        }
    }

    pub fn buy(price: Decimal, quantity: Decimal) -> Self {
        Self::new(Side::Buy, price, quantity)
    }

    pub fn sell(price: Decimal, quantity: Decimal) -> Self {
        Self::new(Side::Sell, price, quantity)
    }
}

/// Unpriced order filled at the touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOrder {
    pub side: Side,
    pub quantity: Decimal,
}

impl MarketOrder {
    pub fn new(side: Side, quantity: Decimal) -> Self {
        Self { side, quantity }
    }

    pub fn buy(quantity: Decimal) -> Self {
        Self::new(Side::Buy, quantity)
    }

    pub fn sell(quantity: Decimal) -> Self {
        Self::new(Side::Sell, quantity)
    }
}

/// Any order accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Order {
    Limit(LimitOrder),
    Market(MarketOrder),
}

impl Order {
    pub fn side(&self) -> Side {
        match self {
            Order::Limit(order) => order.side,
            Order::Market(order) => order.side,
        }
    }

    pub fn quantity(&self) -> Decimal {
        match self {
            Order::Limit(order) => order.quantity,
            Order::Market(order) => order.quantity,
        }
    }
}

impl From<LimitOrder> for Order {
    fn from(order: LimitOrder) -> Self {
        Order::Limit(order)
    }
}

impl From<MarketOrder> for Order {
    fn from(order: MarketOrder) -> Self {
        Order::Market(order)
    }
}

/// Loosely typed order as received from an upstream feed or file
///
/// The side is free text and numbers are floats. A record with a price is a
/// limit order; a record without one is a market order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub side: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub quantity: f64,
}

impl OrderRecord {
    pub fn limit(side: impl Into<String>, price: f64, quantity: f64) -> Self {
        Self {
            side: side.into(),
            price: Some(price),
            quantity,
        }
    }

    pub fn market(side: impl Into<String>, quantity: f64) -> Self {
        Self {
            side: side.into(),
            price: None,
            quantity,
        }
    }
}

impl TryFrom<&OrderRecord> for Order {
    type Error = OrderError;

    fn try_from(record: &OrderRecord) -> Result<Self, Self::Error> {
        let side = Side::from_str(&record.side)?;
        let quantity = decimal_from_f64(record.quantity, "quantity")?;
        match record.price {
            Some(price) => {
                let price = decimal_from_f64(price, "price")?;
                Ok(Order::Limit(LimitOrder::new(side, price, quantity)))
            }
            None => Ok(Order::Market(MarketOrder::new(side, quantity))),
        }
    }
}
