//! Collaborator views
//!
//! Read-only projections of a snapshot for the reporter (price ladders) and
//! the renderer (step series, JSON export). Decimals are kept exact; JSON
//! carries them as strings.

use auction_types::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::book::PriceBucket;
use crate::curve::SupplyDemandCurve;
use crate::error::Advisory;
use crate::market_volume::MarketVolume;
use crate::snapshot::BookSnapshot;

/// A single ladder level for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderLevel {
    pub price: Price,
    pub quantity: Quantity,
    /// Running total including the side's market volume
    pub cumulative_quantity: Quantity,
}

/// Bucket levels best-first with running totals starting at `origin`
pub fn ladder(bucket: &PriceBucket, origin: Quantity) -> Vec<LadderLevel> {
    let mut cumulative = origin;
    bucket
        .best_first()
        .into_iter()
        .map(|(price, quantity)| {
            cumulative = cumulative.saturating_add(quantity);
            LadderLevel {
                price,
                quantity,
                cumulative_quantity: cumulative,
            }
        })
        .collect()
}

/// Parallel x/y vectors for a step plot (x = cumulative quantity, y = price)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSeries {
    pub label: String,
    pub quantities: Vec<Decimal>,
    pub prices: Vec<Decimal>,
}

impl From<&SupplyDemandCurve> for StepSeries {
    fn from(curve: &SupplyDemandCurve) -> Self {
        let (quantities, prices) = curve
            .points
            .iter()
            .map(|point| (point.cumulative_quantity.as_decimal(), point.price.as_decimal()))
            .unzip();

        Self {
            label: curve.label().to_string(),
            quantities,
            prices,
        }
    }
}

/// Complete export of one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookExport {
    pub bids: Vec<LadderLevel>,
    pub asks: Vec<LadderLevel>,
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
    pub spread: Option<Decimal>,
    pub market_volume: MarketVolume,
    pub demand: StepSeries,
    pub supply: StepSeries,
    pub advisories: Vec<Advisory>,
    pub checksum: String,
}

/// Generate an export from a snapshot.
///
/// Missing quotes serialize as `null`; readers must treat them as
/// "unavailable", not as a zero price.
pub fn export(snapshot: &BookSnapshot) -> BookExport {
    BookExport {
        bids: snapshot.bid_ladder(),
        asks: snapshot.ask_ladder(),
        best_bid: snapshot.best_bid().ok(),
        best_ask: snapshot.best_ask().ok(),
        spread: snapshot.quotes().spread().ok(),
        market_volume: snapshot.market_volume(),
        demand: StepSeries::from(snapshot.demand_curve()),
        supply: StepSeries::from(snapshot.supply_curve()),
        advisories: snapshot.advisories().to_vec(),
        checksum: snapshot.checksum(),
    }
}

/// Export a snapshot as a pretty JSON string.
pub fn export_json(snapshot: &BookSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&export(snapshot))
}
