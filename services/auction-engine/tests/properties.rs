//! Property-based tests for auction book invariants
//!
//! - Bucket totals equal the limit quantity of their side
//! - Every bucket price traces back to an input limit order
//! - Curves are monotonic in quantity and in price
//! - Best quotes are the extreme bucket keys

use std::collections::BTreeSet;

use auction_engine::AuctionEngine;
use auction_types::numeric::{Price, TickSize};
use auction_types::order::{LimitOrder, MarketOrder, Side};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Prices 0.01..=1000.00 with up to four decimals (some off-tick)
fn arb_price() -> impl Strategy<Value = Decimal> {
    (100i64..=10_000_000i64).prop_map(|raw| Decimal::new(raw, 4))
}

/// Positive quantities with up to three decimals
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|raw| Decimal::new(raw, 3))
}

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn arb_limit() -> impl Strategy<Value = LimitOrder> {
    (arb_side(), arb_price(), arb_quantity())
        .prop_map(|(side, price, quantity)| LimitOrder::new(side, price, quantity))
}

fn arb_market() -> impl Strategy<Value = MarketOrder> {
    (arb_side(), arb_quantity()).prop_map(|(side, quantity)| MarketOrder::new(side, quantity))
}

fn side_total(limits: &[LimitOrder], side: Side) -> Decimal {
    limits
        .iter()
        .filter(|o| o.side == side)
        .map(|o| o.quantity)
        .sum()
}

proptest! {
    #[test]
    fn prop_bucket_totals_match_limit_orders(
        limits in prop::collection::vec(arb_limit(), 0..60),
        markets in prop::collection::vec(arb_market(), 0..10),
    ) {
        let snapshot = AuctionEngine::default().build(&limits, &markets).unwrap();

        prop_assert_eq!(snapshot.bids().total_quantity().as_decimal(), side_total(&limits, Side::Buy));
        prop_assert_eq!(snapshot.asks().total_quantity().as_decimal(), side_total(&limits, Side::Sell));
    }

    #[test]
    fn prop_bucket_keys_trace_to_orders(limits in prop::collection::vec(arb_limit(), 1..60)) {
        let snapshot = AuctionEngine::default().build(&limits, &[]).unwrap();
        let tick = TickSize::default();

        for (bucket, side) in [(snapshot.bids(), Side::Buy), (snapshot.asks(), Side::Sell)] {
            let expected: BTreeSet<Decimal> = limits
                .iter()
                .filter(|o| o.side == side)
                .map(|o| tick.normalize(o.price).unwrap())
                .collect();
            let actual: BTreeSet<Decimal> = bucket.ascending().map(|(p, _)| p.as_decimal()).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn prop_curves_are_monotonic(
        limits in prop::collection::vec(arb_limit(), 0..60),
        markets in prop::collection::vec(arb_market(), 0..10),
    ) {
        let snapshot = AuctionEngine::default().build(&limits, &markets).unwrap();

        let demand = snapshot.demand_curve();
        let mut previous = demand.origin;
        for window in demand.points.windows(2) {
            prop_assert!(window[0].price > window[1].price);
        }
        for point in &demand.points {
            prop_assert!(point.cumulative_quantity > previous);
            previous = point.cumulative_quantity;
        }

        let supply = snapshot.supply_curve();
        let mut previous = supply.origin;
        for window in supply.points.windows(2) {
            prop_assert!(window[0].price < window[1].price);
        }
        for point in &supply.points {
            prop_assert!(point.cumulative_quantity > previous);
            previous = point.cumulative_quantity;
        }
    }

    #[test]
    fn prop_best_quotes_are_extreme_keys(limits in prop::collection::vec(arb_limit(), 0..60)) {
        let snapshot = AuctionEngine::default().build(&limits, &[]).unwrap();

        let max_bid: Option<Price> = snapshot.bids().ascending().map(|(p, _)| p).max();
        let min_ask: Option<Price> = snapshot.asks().ascending().map(|(p, _)| p).min();

        prop_assert_eq!(snapshot.best_bid().ok(), max_bid);
        prop_assert_eq!(snapshot.best_ask().ok(), min_ask);
        prop_assert_eq!(snapshot.best_bid().is_err(), snapshot.bids().is_empty());
        prop_assert_eq!(snapshot.best_ask().is_err(), snapshot.asks().is_empty());
    }

    #[test]
    fn prop_curve_origin_is_market_volume(
        limits in prop::collection::vec(arb_limit(), 0..20),
        markets in prop::collection::vec(arb_market(), 0..10),
    ) {
        let snapshot = AuctionEngine::default().build(&limits, &markets).unwrap();
        let buy_volume: Decimal = markets.iter().filter(|m| m.side == Side::Buy).map(|m| m.quantity).sum();
        let sell_volume: Decimal = markets.iter().filter(|m| m.side == Side::Sell).map(|m| m.quantity).sum();

        prop_assert_eq!(snapshot.demand_curve().origin.as_decimal(), buy_volume);
        prop_assert_eq!(snapshot.supply_curve().origin.as_decimal(), sell_volume);
    }
}
