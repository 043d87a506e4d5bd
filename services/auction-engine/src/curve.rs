//! Cumulative supply and demand curves
//!
//! Demand walks the bid bucket from the highest price down, supply walks the
//! ask bucket from the lowest price up. Each curve starts at its side's
//! market order volume: market orders must clear before any limit price is
//! reached.
//!
//! Cumulative sums saturate at the decimal range. The engine rejects inputs
//! whose curve would get there, so a built snapshot never holds a clamped
//! point.

use auction_types::numeric::{Price, Quantity};
use auction_types::order::Side;
use serde::{Deserialize, Serialize};

use crate::book::PriceBucket;

/// One step of a cumulative curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub cumulative_quantity: Quantity,
    pub price: Price,
}

/// Materialized cumulative curve for one side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyDemandCurve {
    pub side: Side,
    /// Cumulative quantity before the first limit level (market volume)
    pub origin: Quantity,
    pub points: Vec<CurvePoint>,
}

impl SupplyDemandCurve {
    /// Cumulative quantity at the end of the curve
    pub fn total_quantity(&self) -> Quantity {
        self.points
            .last()
            .map(|point| point.cumulative_quantity)
            .unwrap_or(self.origin)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn label(&self) -> &'static str {
        match self.side {
            Side::Buy => "Demand",
            Side::Sell => "Supply",
        }
    }
}

/// Demand curve: bids in descending price order, seeded with buy market volume
pub fn demand_curve(bids: &PriceBucket, buy_market_volume: Quantity) -> SupplyDemandCurve {
    accumulate(Side::Buy, bids.descending(), buy_market_volume)
}

/// Supply curve: asks in ascending price order, seeded with sell market volume
pub fn supply_curve(asks: &PriceBucket, sell_market_volume: Quantity) -> SupplyDemandCurve {
    accumulate(Side::Sell, asks.ascending(), sell_market_volume)
}

fn accumulate(
    side: Side,
    levels: impl Iterator<Item = (Price, Quantity)>,
    origin: Quantity,
) -> SupplyDemandCurve {
    let mut cumulative = origin;
    let points = levels
        .map(|(price, quantity)| {
            cumulative = cumulative.saturating_add(quantity);
            CurvePoint {
                cumulative_quantity: cumulative,
                price,
            }
        })
        .collect();

    SupplyDemandCurve {
        side,
        origin,
        points,
    }
}
