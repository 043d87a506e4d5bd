//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Price normalization rounds to the nearest tick using HALF_UP rounding.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, OrderError};

/// A strictly positive price
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price, rejecting zero and negative values
    pub fn try_new(value: Decimal) -> Result<Self, OrderError> {
        if value <= Decimal::ZERO {
            return Err(OrderError::NonPositivePrice {
                price: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s).map_err(|_| OrderError::InvalidDecimal {
            value: s.to_string(),
        })?;
        Self::try_new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative quantity
///
/// Order quantities are strictly positive; aggregated totals may be zero
/// (e.g. a side with no market orders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// The zero quantity
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create an order quantity, rejecting zero and negative values
    pub fn try_positive(value: Decimal) -> Result<Self, OrderError> {
        if value <= Decimal::ZERO {
            return Err(OrderError::NonPositiveQuantity {
                quantity: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Add two quantities, returning `None` past the decimal range
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Add two quantities, clamping at the decimal range
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl FromStr for Quantity {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s).map_err(|_| OrderError::InvalidDecimal {
            value: s.to_string(),
        })?;
        Self::try_positive(value)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimum price increment used to key price buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TickSize(Decimal);

impl TickSize {
    pub fn new(value: Decimal) -> Result<Self, ConfigError> {
        if value <= Decimal::ZERO {
            return Err(ConfigError::InvalidTickSize {
                tick_size: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Round a raw price to the nearest tick (half-up).
    ///
    /// The result always carries the tick's scale, so `100`, `100.0` and
    /// `100.001` all normalize to `100.00` at a 0.01 tick. Returns `None`
    /// when the division or multiplication overflows.
    pub fn normalize(&self, raw: Decimal) -> Option<Decimal> {
        let ticks = raw
            .checked_div(self.0)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let mut price = ticks.checked_mul(self.0)?;
        price.rescale(self.0.scale());
        Some(price)
    }
}

impl Default for TickSize {
    /// One currency minor unit (0.01)
    fn default() -> Self {
        Self(Decimal::new(1, 2))
    }
}

impl TryFrom<Decimal> for TickSize {
    type Error = ConfigError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TickSize> for Decimal {
    fn from(tick: TickSize) -> Self {
        tick.0
    }
}

impl fmt::Display for TickSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a raw floating-point input into a decimal.
///
/// NaN and infinities are rejected, as are finite values outside the
/// decimal range; `field` names the input for the error.
pub fn decimal_from_f64(value: f64, field: &str) -> Result<Decimal, OrderError> {
    if !value.is_finite() {
        return Err(OrderError::NonFiniteValue {
            field: field.to_string(),
        });
    }
    Decimal::try_from(value).map_err(|_| OrderError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
    })
}
