// ============================================================================
// Order Repository Library
// Thread-safe two-sided order store with price-cross matching
// ============================================================================

//! # Order Repository
//!
//! A concurrency-safe, in-memory repository of resting orders for a simple
//! two-sided (ask/bid) market.
//!
//! ## Features
//!
//! - **Soft delete** - orders are disabled, never removed
//! - **Expiry-aware reads** - an order is visible only while it is enabled
//!   and before its deadline
//! - **Price-cross matching** - advisory candidate search on the opposite side
//! - **Market data snapshots** - price-sorted (price, quantity) per side
//! - **Single-lock linearizability** - every operation runs under one mutex
//!
//! ## Example
//!
//! ```rust
//! use order_repository::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let repository = InMemoryOrderRepository::new();
//!
//! let ask = Order::good_till_cancelled(
//!     OrderDetails::new(Side::Ask, Decimal::from(100), 10).with_counterparty("seller"),
//! );
//! repository.create_order(Some(ask.clone())).unwrap();
//!
//! // Which asks would a bid at 150 cross?
//! let probe = Order::probe(Side::Bid, Decimal::from(150));
//! let candidates = repository.match_order(Some(&probe)).unwrap();
//! assert_eq!(candidates.len(), 1);
//!
//! // Soft delete hides the order from every read
//! repository.disable_order(ask.id).unwrap();
//! assert_eq!(repository.order_by_id(ask.id), Err(RepositoryError::NotFound));
//!
//! let snapshot = repository.market_data_snapshot().unwrap();
//! assert!(snapshot.is_empty());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        MarketDataSnapshot, Order, OrderDetails, OrderId, OrderKind, OrderSnapshot, OrderState,
        RepositoryConfig, Side,
    };
    pub use crate::engine::{create_from_config, InMemoryOrderRepository, OrderRepositoryBuilder};
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, OrderRepository, RepositoryError,
        RepositoryEvent, RepositoryResult,
    };
}
