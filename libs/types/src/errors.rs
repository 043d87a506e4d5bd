//! Error types for the auction book engine
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

use crate::order::Side;

/// Order-specific errors
///
/// Raised when an input order cannot take part in a run. Structural: the
/// whole run is aborted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Invalid side: {value:?} (expected \"buy\" or \"sell\")")]
    InvalidSide { value: String },

    #[error("Non-positive price: {price}")]
    NonPositivePrice { price: String },

    #[error("Non-positive quantity: {quantity}")]
    NonPositiveQuantity { quantity: String },

    #[error("Non-finite value for {field}")]
    NonFiniteValue { field: String },

    #[error("Invalid decimal: {value:?}")]
    InvalidDecimal { value: String },

    #[error("Price out of range: {price}")]
    PriceOutOfRange { price: String },

    #[error("{field} out of range: {value}")]
    ValueOutOfRange { field: String, value: String },

    #[error("Quantity overflow adding {quantity}")]
    QuantityOverflow { quantity: String },
}

/// Book-side errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    /// No resting limit liquidity on the requested side.
    #[error("No {side} liquidity available")]
    EmptyBookSide { side: Side },
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Tick size must be positive, got {tick_size}")]
    InvalidTickSize { tick_size: String },

    #[error("Precision tolerance must not be negative, got {tolerance}")]
    NegativeTolerance { tolerance: String },
}
