// ============================================================================
// In-Memory Order Repository
// Reference implementation of the repository contract
// ============================================================================

use super::matcher::collect_matches;
use super::snapshot::build_snapshot;
use crate::domain::{
    MarketDataSnapshot, Order, OrderDetails, OrderId, RepositoryConfig, Side,
};
use crate::interfaces::{
    EventHandler, NoOpEventHandler, OrderRepository, RepositoryError, RepositoryEvent,
    RepositoryResult,
};
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Both sides of the market, keyed by order identity
struct Book {
    asks: HashMap<OrderId, Order>,
    bids: HashMap<OrderId, Order>,
}

impl Book {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            asks: HashMap::with_capacity(capacity),
            bids: HashMap::with_capacity(capacity),
        }
    }

    fn side(&self, side: Side) -> &HashMap<OrderId, Order> {
        match side {
            Side::Ask => &self.asks,
            Side::Bid => &self.bids,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut HashMap<OrderId, Order> {
        match side {
            Side::Ask => &mut self.asks,
            Side::Bid => &mut self.bids,
        }
    }

    /// Asks first; the bid side is only consulted when the ask side has no
    /// entry for `id`.
    fn find_mut(&mut self, id: &OrderId) -> Option<&mut Order> {
        if self.asks.contains_key(id) {
            self.asks.get_mut(id)
        } else {
            self.bids.get_mut(id)
        }
    }
}

/// Thread-safe in-memory order repository.
///
/// One mutex covers both sides and is held for the whole body of every
/// operation, reads included, so all operations are totally ordered. Orders
/// are never removed: disabling and expiry only hide them.
pub struct InMemoryOrderRepository {
    config: RepositoryConfig,

    book: Mutex<Book>,

    /// Notified after the lock is released
    event_handler: Arc<dyn EventHandler>,
}

impl InMemoryOrderRepository {
    /// Create a repository with default configuration and no event handler
    pub fn new() -> Self {
        Self::with_config(RepositoryConfig::default(), Arc::new(NoOpEventHandler))
    }

    /// Create a repository without validating `config`; see
    /// [`create_from_config`](super::create_from_config) for the checked path.
    pub fn with_config(config: RepositoryConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        let book = Book::with_capacity(config.initial_capacity);
        Self {
            config,
            book: Mutex::new(book),
            event_handler,
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn get_market(&self) -> &str {
        &self.config.market
    }

    /// Build a good-till-cancelled order using this repository's default
    /// validity. The order is not stored.
    pub fn new_order(&self, details: OrderDetails) -> Order {
        Order::good_till_cancelled_with_validity(details, self.config.default_validity)
    }

    /// Number of stored records on both sides, including disabled and
    /// expired ones
    pub fn stored_orders(&self) -> usize {
        let book = self.book.lock();
        book.asks.len() + book.bids.len()
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn create_order(&self, order: Option<Order>) -> RepositoryResult<()> {
        let order = order.ok_or(RepositoryError::EmptyInput)?;

        if order.id.is_nil() {
            return Err(RepositoryError::ZeroIdentity);
        }

        let (order_id, side, price, quantity) = (order.id, order.side, order.price, order.quantity);

        let replaced = {
            let mut book = self.book.lock();
            book.side_mut(side).insert(order_id, order).is_some()
        };

        let timestamp = Utc::now();
        let event = if replaced {
            warn!(market = %self.config.market, %order_id, %side, "order identity overwritten");
            RepositoryEvent::OrderReplaced {
                order_id,
                side,
                price,
                quantity,
                timestamp,
            }
        } else {
            debug!(market = %self.config.market, %order_id, %side, %price, quantity, "order created");
            RepositoryEvent::OrderCreated {
                order_id,
                side,
                price,
                quantity,
                timestamp,
            }
        };
        self.event_handler.on_event(event);

        Ok(())
    }

    fn disable_order(&self, id: OrderId) -> RepositoryResult<()> {
        if id.is_nil() {
            return Err(RepositoryError::ZeroIdentity);
        }

        let disabled_side = {
            let mut book = self.book.lock();
            let now = Utc::now();

            let order = book.find_mut(&id).ok_or(RepositoryError::NotFound)?;
            if order.is_processable_at(now) {
                order.disable();
                Some(order.side)
            } else {
                None
            }
        };

        match disabled_side {
            Some(side) => {
                debug!(market = %self.config.market, order_id = %id, %side, "order disabled");
                self.event_handler.on_event(RepositoryEvent::OrderDisabled {
                    order_id: id,
                    side,
                    timestamp: Utc::now(),
                });
            },
            None => {
                trace!(market = %self.config.market, order_id = %id, "order already unprocessable");
            },
        }

        Ok(())
    }

    fn order_by_id(&self, id: OrderId) -> RepositoryResult<Order> {
        if id.is_nil() {
            return Err(RepositoryError::ZeroIdentity);
        }

        let book = self.book.lock();
        let now = Utc::now();

        book.asks
            .get(&id)
            .filter(|order| order.is_processable_at(now))
            .or_else(|| book.bids.get(&id).filter(|order| order.is_processable_at(now)))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    fn match_order(&self, probe: Option<&Order>) -> RepositoryResult<Vec<Order>> {
        let probe = probe.ok_or(RepositoryError::EmptyInput)?;

        let book = self.book.lock();
        let now = Utc::now();

        let matches = collect_matches(book.side(probe.side.opposite()), probe.side, probe.price, now);
        trace!(
            market = %self.config.market,
            side = %probe.side,
            price = %probe.price,
            matches = matches.len(),
            "match query"
        );

        Ok(matches)
    }

    fn market_data_snapshot(&self) -> RepositoryResult<MarketDataSnapshot> {
        let book = self.book.lock();
        let now = Utc::now();

        let snapshot = build_snapshot(&book.asks, &book.bids, now);
        trace!(
            market = %self.config.market,
            asks = snapshot.asks.len(),
            bids = snapshot.bids.len(),
            "market data snapshot"
        );

        Ok(snapshot)
    }

    fn close(&self) -> RepositoryResult<()> {
        debug!(market = %self.config.market, "in-memory repository closed");
        self.event_handler.on_event(RepositoryEvent::RepositoryClosed {
            timestamp: Utc::now(),
        });
        Ok(())
    }
}
