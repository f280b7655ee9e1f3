// ============================================================================
// Market Data Domain Model
// ============================================================================

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Snapshot
// ============================================================================

/// (price, quantity) projection of a single order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderSnapshot {
    pub price: Decimal,
    pub quantity: u64,
}

impl OrderSnapshot {
    pub fn new(price: Decimal, quantity: u64) -> Self {
        Self { price, quantity }
    }
}

// ============================================================================
// Market Data Snapshot
// ============================================================================

/// Point-in-time view of both sides, each sorted ascending by price
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarketDataSnapshot {
    pub asks: Vec<OrderSnapshot>,
    pub bids: Vec<OrderSnapshot>,
}

impl MarketDataSnapshot {
    pub fn new(asks: Vec<OrderSnapshot>, bids: Vec<OrderSnapshot>) -> Self {
        Self { asks, bids }
    }

    /// Lowest ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|level| level.price)
    }

    /// Highest bid price (bids are ascending, so the last entry)
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.last().map(|level| level.price)
    }

    /// Best ask minus best bid. Negative when the book is crossed, which
    /// can happen since matching never removes orders.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    pub fn total_ask_quantity(&self) -> u64 {
        self.asks.iter().map(|level| level.quantity).sum()
    }

    pub fn total_bid_quantity(&self) -> u64 {
        self.bids.iter().map(|level| level.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(price: i64, quantity: u64) -> OrderSnapshot {
        OrderSnapshot::new(Decimal::from(price), quantity)
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MarketDataSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.best_ask(), None);
        assert_eq!(snapshot.best_bid(), None);
        assert_eq!(snapshot.spread(), None);
        assert_eq!(snapshot.total_ask_quantity(), 0);
    }

    #[test]
    fn test_best_prices_and_spread() {
        let snapshot = MarketDataSnapshot::new(
            vec![level(50100, 2), level(50200, 1)],
            vec![level(49900, 3), level(50000, 1)],
        );

        assert_eq!(snapshot.best_ask(), Some(Decimal::from(50100)));
        assert_eq!(snapshot.best_bid(), Some(Decimal::from(50000)));
        assert_eq!(snapshot.spread(), Some(Decimal::from(100)));
        assert_eq!(snapshot.total_ask_quantity(), 3);
        assert_eq!(snapshot.total_bid_quantity(), 4);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_one_sided_book_has_no_spread() {
        let snapshot = MarketDataSnapshot::new(vec![level(10, 1)], Vec::new());
        assert_eq!(snapshot.best_ask(), Some(Decimal::from(10)));
        assert_eq!(snapshot.spread(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_export() {
        let snapshot = MarketDataSnapshot::new(vec![level(10, 1)], Vec::new());
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"asks\""));
        assert!(json.contains("\"quantity\":1"));
    }
}
