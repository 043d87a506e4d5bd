//! Best quote resolution
//!
//! Best bid is the highest price with buy liquidity, best ask the lowest
//! price with sell liquidity. An empty side is reported as
//! `BookError::EmptyBookSide`, never as a zero price.

use auction_types::errors::BookError;
use auction_types::numeric::Price;
use auction_types::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::book::PriceBucket;

/// Highest bid price
pub fn best_bid(bids: &PriceBucket) -> Result<Price, BookError> {
    best_of(bids, Side::Buy)
}

/// Lowest ask price
pub fn best_ask(asks: &PriceBucket) -> Result<Price, BookError> {
    best_of(asks, Side::Sell)
}

fn best_of(bucket: &PriceBucket, side: Side) -> Result<Price, BookError> {
    debug_assert_eq!(bucket.side(), side, "bucket passed for the wrong side");
    bucket.best_price().ok_or(BookError::EmptyBookSide { side })
}

/// Check if a bid and ask price cross (bid >= ask)
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Best bid and ask of one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestQuotes {
    bid: Option<Price>,
    ask: Option<Price>,
}

impl BestQuotes {
    pub fn resolve(bids: &PriceBucket, asks: &PriceBucket) -> Self {
        Self {
            bid: best_bid(bids).ok(),
            ask: best_ask(asks).ok(),
        }
    }

    pub fn bid(&self) -> Result<Price, BookError> {
        self.bid.ok_or(BookError::EmptyBookSide { side: Side::Buy })
    }

    pub fn ask(&self) -> Result<Price, BookError> {
        self.ask.ok_or(BookError::EmptyBookSide { side: Side::Sell })
    }

    /// Best price of one side
    pub fn for_side(&self, side: Side) -> Result<Price, BookError> {
        match side {
            Side::Buy => self.bid(),
            Side::Sell => self.ask(),
        }
    }

    /// Ask minus bid. Negative when the book is crossed.
    pub fn spread(&self) -> Result<Decimal, BookError> {
        Ok(self.ask()?.as_decimal() - self.bid()?.as_decimal())
    }

    /// True when both sides exist and the best bid reaches the best ask
    pub fn is_crossed(&self) -> bool {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => can_match(bid, ask),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_types::numeric::Quantity;
    use std::str::FromStr;

    fn px(s: &str) -> Price {
        Price::from_str(s).unwrap()
    }

    fn bucket(side: Side, prices: &[&str]) -> PriceBucket {
        let mut bucket = PriceBucket::new(side);
        for p in prices {
            bucket.add(px(p), Quantity::from_str("1").unwrap()).unwrap();
        }
        bucket
    }

    #[test]
    fn test_best_bid_is_max() {
        let bids = bucket(Side::Buy, &["99", "100", "98.5"]);
        assert_eq!(best_bid(&bids), Ok(px("100")));
    }

    #[test]
    fn test_best_ask_is_min() {
        let asks = bucket(Side::Sell, &["103", "102", "104"]);
        assert_eq!(best_ask(&asks), Ok(px("102")));
    }

    #[test]
    fn test_empty_side_is_explicit() {
        let asks = PriceBucket::new(Side::Sell);
        assert_eq!(
            best_ask(&asks),
            Err(BookError::EmptyBookSide { side: Side::Sell })
        );

        let quotes = BestQuotes::resolve(&bucket(Side::Buy, &["10"]), &asks);
        assert_eq!(quotes.bid(), Ok(px("10")));
        assert_eq!(
            quotes.ask(),
            Err(BookError::EmptyBookSide { side: Side::Sell })
        );
        assert!(quotes.spread().is_err());
        assert!(!quotes.is_crossed());
    }

    #[test]
    fn test_spread() {
        let quotes = BestQuotes::resolve(&bucket(Side::Buy, &["100"]), &bucket(Side::Sell, &["102"]));
        assert_eq!(quotes.spread(), Ok(Decimal::from(2)));
        assert!(!quotes.is_crossed());
    }

    #[test]
    fn test_crossed_book() {
        let quotes = BestQuotes::resolve(&bucket(Side::Buy, &["4"]), &bucket(Side::Sell, &["3"]));
        assert!(quotes.is_crossed());
        assert_eq!(quotes.spread(), Ok(Decimal::from(-1)));
    }

    #[test]
    fn test_can_match_exact() {
        let price = px("50000");
        assert!(can_match(price, price), "Equal prices should match");
    }
}
