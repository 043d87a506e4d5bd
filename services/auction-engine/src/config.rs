//! Engine configuration

use auction_types::errors::ConfigError;
use auction_types::numeric::TickSize;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AuctionError;

/// Configuration for the auction engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tick that limit prices are rounded to before bucketing.
    pub tick_size: TickSize,
    /// Largest distance between a raw price and its tick before a
    /// precision-loss advisory is raised.
    pub precision_tolerance: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_size: TickSize::default(),
            precision_tolerance: Decimal::new(1, 6),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision_tolerance < Decimal::ZERO {
            return Err(ConfigError::NegativeTolerance {
                tolerance: self.precision_tolerance.to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate a configuration from JSON.
    ///
    /// Missing fields fall back to their defaults. Decimals are strings.
    pub fn from_json(json: &str) -> Result<Self, AuctionError> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| AuctionError::MalformedConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
