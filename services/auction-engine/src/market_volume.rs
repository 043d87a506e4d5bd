//! Market order volume
//!
//! Market orders carry no price. Their quantity is summed per side and used
//! as the starting offset of that side's cumulative curve.

use auction_types::errors::OrderError;
use auction_types::numeric::Quantity;
use auction_types::order::{MarketOrder, Side};
use serde::{Deserialize, Serialize};

use crate::book::AggregatedBook;
use crate::classifier::{ClassifiedOrders, Sequenced};
use crate::error::AuctionError;

/// Accumulated market order quantity per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketVolume {
    pub buy: Quantity,
    pub sell: Quantity,
}

impl MarketVolume {
    pub fn for_side(&self, side: Side) -> Quantity {
        match side {
            Side::Buy => self.buy,
            Side::Sell => self.sell,
        }
    }
}

/// Sum market order quantity on both sides
pub fn accumulate(classified: &ClassifiedOrders) -> Result<MarketVolume, AuctionError> {
    Ok(MarketVolume {
        buy: accumulate_side(Side::Buy, classified.markets(Side::Buy), Quantity::zero())?,
        sell: accumulate_side(Side::Sell, classified.markets(Side::Sell), Quantity::zero())?,
    })
}

/// Sum market order quantity on top of the aggregated limit book.
///
/// A side's curve climbs from its market volume to market volume plus the
/// resting limit total. The market order that would take that sum out of
/// the decimal range is rejected.
pub fn accumulate_with_book(
    classified: &ClassifiedOrders,
    book: &AggregatedBook,
) -> Result<MarketVolume, AuctionError> {
    Ok(MarketVolume {
        buy: accumulate_side(
            Side::Buy,
            classified.markets(Side::Buy),
            book.bids.total_quantity(),
        )?,
        sell: accumulate_side(
            Side::Sell,
            classified.markets(Side::Sell),
            book.asks.total_quantity(),
        )?,
    })
}

fn accumulate_side(
    side: Side,
    orders: &[Sequenced<MarketOrder>],
    resting: Quantity,
) -> Result<Quantity, AuctionError> {
    orders.iter().try_fold(Quantity::zero(), |total, entry| {
        add_order(total, resting, &entry.order).map_err(|source| AuctionError::MarketOrder {
            side,
            position: entry.position,
            source,
        })
    })
}

fn add_order(total: Quantity, resting: Quantity, order: &MarketOrder) -> Result<Quantity, OrderError> {
    let quantity = Quantity::try_positive(order.quantity)?;
    let overflow = || OrderError::QuantityOverflow {
        quantity: quantity.to_string(),
    };
    let total = total.checked_add(quantity).ok_or_else(overflow)?;
    total.checked_add(resting).ok_or_else(overflow)?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::PriceBookAggregator;
    use crate::classifier::classify;
    use auction_types::order::LimitOrder;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_accumulate_per_side() {
        let markets = vec![
            MarketOrder::buy(Decimal::from(5)),
            MarketOrder::buy(Decimal::from(10)),
            MarketOrder::sell(Decimal::from(4)),
        ];

        let volume = accumulate(&classify(&[], &markets)).unwrap();

        assert_eq!(volume.buy.as_decimal(), Decimal::from(15));
        assert_eq!(volume.for_side(Side::Sell).as_decimal(), Decimal::from(4));
    }

    #[test]
    fn test_no_market_orders_is_zero() {
        let volume = accumulate(&classify(&[], &[])).unwrap();
        assert_eq!(volume, MarketVolume::default());
        assert!(volume.buy.is_zero());
        assert!(volume.sell.is_zero());
    }

    #[test]
    fn test_zero_quantity_market_order_rejected() {
        let markets = vec![
            MarketOrder::sell(Decimal::from(1)),
            MarketOrder::sell(Decimal::ZERO),
        ];

        let err = accumulate(&classify(&[], &markets)).unwrap_err();

        assert_eq!(
            err,
            AuctionError::MarketOrder {
                side: Side::Sell,
                position: 1,
                source: OrderError::NonPositiveQuantity {
                    quantity: "0".to_string()
                },
            }
        );
    }

    #[test]
    fn test_market_total_overflow_is_rejected() {
        let large = Decimal::from_str("50000000000000000000000000000").unwrap();
        let markets = vec![MarketOrder::buy(large), MarketOrder::buy(large)];

        let err = accumulate(&classify(&[], &markets)).unwrap_err();

        assert_eq!(err.position(), Some(1));
        assert!(matches!(
            err.order_error(),
            Some(OrderError::QuantityOverflow { .. })
        ));
    }

    #[test]
    fn test_market_volume_on_top_of_book_overflow() {
        let large = Decimal::from_str("50000000000000000000000000000").unwrap();
        let classified = classify(
            &[LimitOrder::buy(Decimal::from(100), large)],
            &[MarketOrder::sell(large), MarketOrder::buy(large)],
        );
        let book = PriceBookAggregator::default().aggregate(&classified).unwrap();

        assert!(accumulate(&classified).is_ok());
        assert_eq!(
            accumulate_with_book(&classified, &book).unwrap_err(),
            AuctionError::MarketOrder {
                side: Side::Buy,
                position: 1,
                source: OrderError::QuantityOverflow {
                    quantity: large.to_string()
                },
            }
        );
    }
}
