// ============================================================================
// Event Handler Interface
// Defines the contract for observing repository mutations
// ============================================================================

use crate::domain::{OrderId, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by an order repository after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RepositoryEvent {
    /// New order stored
    OrderCreated {
        order_id: OrderId,
        side: Side,
        price: Decimal,
        quantity: u64,
        timestamp: DateTime<Utc>,
    },

    /// Order stored over an existing entry with the same identity
    OrderReplaced {
        order_id: OrderId,
        side: Side,
        price: Decimal,
        quantity: u64,
        timestamp: DateTime<Utc>,
    },

    /// Processable order soft-deleted
    OrderDisabled {
        order_id: OrderId,
        side: Side,
        timestamp: DateTime<Utc>,
    },

    /// Repository closed
    RepositoryClosed { timestamp: DateTime<Utc> },
}

/// Event handler trait for processing repository events
/// Implementations can handle logging, audit trails, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a repository event
    fn on_event(&self, event: RepositoryEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<RepositoryEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: RepositoryEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: RepositoryEvent) {
        tracing::info!("Order repository event: {:?}", event);
    }
}
