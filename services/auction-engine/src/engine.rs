//! Auction engine core
//!
//! Entry point that runs the full pipeline over one static order
//! collection: classify → aggregate → accumulate → resolve → build curves.

use auction_types::order::{LimitOrder, MarketOrder, Order, OrderRecord};
use tracing::{debug, info, warn};

use crate::book::PriceBookAggregator;
use crate::classifier::{self, ClassifiedOrders};
use crate::config::EngineConfig;
use crate::curve;
use crate::error::AuctionError;
use crate::market_volume;
use crate::quotes::BestQuotes;
use crate::snapshot::BookSnapshot;

/// Stateless auction book builder
///
/// Holds only its configuration. Every build is an independent run that
/// returns a fresh snapshot or fails as a whole.
#[derive(Debug, Clone, Default)]
pub struct AuctionEngine {
    config: EngineConfig,
}

impl AuctionEngine {
    /// Create an engine with a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self, AuctionError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a snapshot from separate limit and market order collections
    pub fn build(
        &self,
        limits: &[LimitOrder],
        markets: &[MarketOrder],
    ) -> Result<BookSnapshot, AuctionError> {
        self.run(classifier::classify(limits, markets))
    }

    /// Build a snapshot from a single mixed order stream
    pub fn build_from_orders(&self, orders: &[Order]) -> Result<BookSnapshot, AuctionError> {
        self.run(classifier::classify_orders(orders))
    }

    /// Build a snapshot from loosely typed records
    pub fn build_from_records(&self, records: &[OrderRecord]) -> Result<BookSnapshot, AuctionError> {
        let classified = classifier::classify_records(records).map_err(|err| {
            warn!(error = %err, "order classification failed");
            err
        })?;
        self.run(classified)
    }

    fn run(&self, orders: ClassifiedOrders) -> Result<BookSnapshot, AuctionError> {
        info!(
            buy_limits = orders.buy_limits.len(),
            sell_limits = orders.sell_limits.len(),
            buy_markets = orders.buy_markets.len(),
            sell_markets = orders.sell_markets.len(),
            tick_size = %self.config.tick_size,
            "building auction book"
        );

        let book = PriceBookAggregator::from_config(&self.config)
            .aggregate(&orders)
            .map_err(|err| {
                warn!(error = %err, "limit order aggregation failed");
                err
            })?;

        let volume = market_volume::accumulate_with_book(&orders, &book).map_err(|err| {
            warn!(error = %err, "market volume accumulation failed");
            err
        })?;
        debug!(buy = %volume.buy, sell = %volume.sell, "market volume accumulated");

        let quotes = BestQuotes::resolve(&book.bids, &book.asks);
        match (quotes.bid(), quotes.ask()) {
            (Ok(bid), Ok(ask)) => debug!(%bid, %ask, crossed = quotes.is_crossed(), "best quotes resolved"),
            (bid, ask) => debug!(?bid, ?ask, "best quotes resolved with an empty side"),
        }

        let demand = curve::demand_curve(&book.bids, volume.buy);
        let supply = curve::supply_curve(&book.asks, volume.sell);

        for advisory in &book.advisories {
            warn!(%advisory, "precision loss in limit price");
        }

        info!(
            bid_levels = book.bids.level_count(),
            ask_levels = book.asks.level_count(),
            advisories = book.advisories.len(),
            "auction book built"
        );

        Ok(BookSnapshot::new(
            orders,
            book.bids,
            book.asks,
            volume,
            quotes,
            demand,
            supply,
            book.advisories,
        ))
    }
}
