//! Engine errors and advisories
//!
//! Structural errors abort the run and no snapshot is produced. Advisories
//! are collected and returned with the successful snapshot.

use std::fmt;

use auction_types::errors::{ConfigError, OrderError};
use auction_types::numeric::Price;
use auction_types::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level engine error
///
/// `position` is the order's index in the caller's input sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuctionError {
    #[error("Order {position} rejected during classification: {source}")]
    Classification { position: usize, source: OrderError },

    #[error("{side} limit order {position} rejected: {source}")]
    LimitOrder {
        side: Side,
        position: usize,
        source: OrderError,
    },

    #[error("{side} market order {position} rejected: {source}")]
    MarketOrder {
        side: Side,
        position: usize,
        source: OrderError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Malformed configuration: {0}")]
    MalformedConfig(String),
}

impl AuctionError {
    /// The order-level cause, if this error was raised for a specific order
    pub fn order_error(&self) -> Option<&OrderError> {
        match self {
            AuctionError::Classification { source, .. }
            | AuctionError::LimitOrder { source, .. }
            | AuctionError::MarketOrder { source, .. } => Some(source),
            AuctionError::Config(_) | AuctionError::MalformedConfig(_) => None,
        }
    }

    /// Input position of the offending order, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            AuctionError::Classification { position, .. }
            | AuctionError::LimitOrder { position, .. }
            | AuctionError::MarketOrder { position, .. } => Some(*position),
            AuctionError::Config(_) | AuctionError::MalformedConfig(_) => None,
        }
    }
}

/// Non-fatal data-quality condition observed during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// A raw limit price sits further from its tick than the configured tolerance.
    PrecisionLoss {
        side: Side,
        position: usize,
        raw: Decimal,
        normalized: Price,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::PrecisionLoss {
                side,
                position,
                raw,
                normalized,
            } => write!(
                f,
                "{side} limit order {position}: price {raw} normalized to {normalized}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_limit_order_error_display() {
        let err = AuctionError::LimitOrder {
            side: Side::Buy,
            position: 3,
            source: OrderError::NonPositiveQuantity {
                quantity: "-1".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "buy limit order 3 rejected: Non-positive quantity: -1"
        );
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: AuctionError = ConfigError::NegativeTolerance {
            tolerance: "-0.1".to_string(),
        }
        .into();
        assert!(matches!(err, AuctionError::Config(_)));
        assert!(err.order_error().is_none());
    }

    #[test]
    fn test_precision_loss_display() {
        let advisory = Advisory::PrecisionLoss {
            side: Side::Sell,
            position: 0,
            raw: Decimal::from_str("100.001").unwrap(),
            normalized: Price::from_str("100.00").unwrap(),
        };
        assert_eq!(
            advisory.to_string(),
            "sell limit order 0: price 100.001 normalized to 100.00"
        );
    }
}
