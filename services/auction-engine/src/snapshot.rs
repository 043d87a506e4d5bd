//! Book snapshot
//!
//! The read-only result of one engine run. A snapshot is only ever
//! constructed from a completed run, so collaborators never see a
//! half-built book.

use auction_types::errors::BookError;
use auction_types::numeric::{Price, Quantity};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::book::PriceBucket;
use crate::classifier::ClassifiedOrders;
use crate::curve::{SupplyDemandCurve, CurvePoint};
use crate::error::Advisory;
use crate::export::{self, LadderLevel};
use crate::market_volume::MarketVolume;
use crate::quotes::BestQuotes;

/// Aggregated view of one static order collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSnapshot {
    orders: ClassifiedOrders,
    bids: PriceBucket,
    asks: PriceBucket,
    market_volume: MarketVolume,
    quotes: BestQuotes,
    demand: SupplyDemandCurve,
    supply: SupplyDemandCurve,
    advisories: Vec<Advisory>,
}

impl BookSnapshot {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        orders: ClassifiedOrders,
        bids: PriceBucket,
        asks: PriceBucket,
        market_volume: MarketVolume,
        quotes: BestQuotes,
        demand: SupplyDemandCurve,
        supply: SupplyDemandCurve,
        advisories: Vec<Advisory>,
    ) -> Self {
        Self {
            orders,
            bids,
            asks,
            market_volume,
            quotes,
            demand,
            supply,
            advisories,
        }
    }

    /// Classified input orders
    pub fn orders(&self) -> &ClassifiedOrders {
        &self.orders
    }

    pub fn bids(&self) -> &PriceBucket {
        &self.bids
    }

    pub fn asks(&self) -> &PriceBucket {
        &self.asks
    }

    pub fn market_volume(&self) -> MarketVolume {
        self.market_volume
    }

    pub fn quotes(&self) -> BestQuotes {
        self.quotes
    }

    pub fn best_bid(&self) -> Result<Price, BookError> {
        self.quotes.bid()
    }

    pub fn best_ask(&self) -> Result<Price, BookError> {
        self.quotes.ask()
    }

    pub fn demand_curve(&self) -> &SupplyDemandCurve {
        &self.demand
    }

    pub fn supply_curve(&self) -> &SupplyDemandCurve {
        &self.supply
    }

    /// Non-fatal conditions observed while building
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Bid levels, highest price first, with cumulative quantity
    pub fn bid_ladder(&self) -> Vec<LadderLevel> {
        export::ladder(&self.bids, self.market_volume.buy)
    }

    /// Ask levels, lowest price first, with cumulative quantity
    pub fn ask_ladder(&self) -> Vec<LadderLevel> {
        export::ladder(&self.asks, self.market_volume.sell)
    }

    /// SHA-256 over buckets, market volume, quotes and curves.
    ///
    /// Two snapshots built from the same input share a checksum.
    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();

        hash_bucket(&mut hasher, &self.bids);
        hash_bucket(&mut hasher, &self.asks);

        hasher.update(self.market_volume.buy.to_string().as_bytes());
        hasher.update(b"/");
        hasher.update(self.market_volume.sell.to_string().as_bytes());
        hasher.update(b"---");

        for quote in [self.quotes.bid(), self.quotes.ask()] {
            match quote {
                Ok(price) => hasher.update(price.to_string().as_bytes()),
                Err(_) => hasher.update(b"none"),
            }
            hasher.update(b"|");
        }
        hasher.update(b"---");

        hash_curve(&mut hasher, &self.demand);
        hash_curve(&mut hasher, &self.supply);

        format!("{:x}", hasher.finalize())
    }
}

fn hash_bucket(hasher: &mut Sha256, bucket: &PriceBucket) {
    for (price, quantity) in bucket.ascending() {
        hash_level(hasher, price, quantity);
    }
    hasher.update(b"---");
}

fn hash_curve(hasher: &mut Sha256, curve: &SupplyDemandCurve) {
    hasher.update(curve.origin.to_string().as_bytes());
    hasher.update(b"|");
    for CurvePoint {
        cumulative_quantity,
        price,
    } in &curve.points
    {
        hash_level(hasher, *price, *cumulative_quantity);
    }
    hasher.update(b"---");
}

fn hash_level(hasher: &mut Sha256, price: Price, quantity: Quantity) {
    hasher.update(price.to_string().as_bytes());
    hasher.update(b":");
    hasher.update(quantity.to_string().as_bytes());
    hasher.update(b"|");
}
