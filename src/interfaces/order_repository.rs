// ============================================================================
// Order Repository Interface
// Defines the contract shared by every storage backend
// ============================================================================

use super::RepositoryResult;
use crate::domain::{MarketDataSnapshot, Order, OrderId};

/// Storage contract for two-sided order repositories.
///
/// The in-memory implementation defines the reference semantics. A durable
/// backend must be indistinguishable from the outside: same error taxonomy,
/// same processability filter (enabled and before the deadline, evaluated in
/// its own query layer), same price-cross rule.
///
/// Every read returns owned values; no implementation may hand out
/// references into its storage.
pub trait OrderRepository: Send + Sync {
    /// Store an order on the side it belongs to, replacing any order with the
    /// same identity on that side.
    ///
    /// # Errors
    /// * `EmptyInput` - no order was supplied
    /// * `ZeroIdentity` - the order carries the nil identity
    fn create_order(&self, order: Option<Order>) -> RepositoryResult<()>;

    /// Soft-delete an order. Disabling an order that is already disabled or
    /// expired succeeds without changing anything.
    ///
    /// # Errors
    /// * `ZeroIdentity` - `id` is nil
    /// * `NotFound` - no order with this identity exists on either side
    fn disable_order(&self, id: OrderId) -> RepositoryResult<()>;

    /// Fetch a copy of a processable order.
    ///
    /// # Errors
    /// * `ZeroIdentity` - `id` is nil
    /// * `NotFound` - absent, disabled or expired
    fn order_by_id(&self, id: OrderId) -> RepositoryResult<Order>;

    /// Find resting orders on the opposite side that cross the probe's price.
    ///
    /// A bid probe returns processable asks with positive quantity priced at
    /// or below it; an ask probe returns processable bids with positive
    /// quantity priced at or above it. Result order is unspecified. Nothing is
    /// filled, decremented or disabled.
    ///
    /// # Errors
    /// * `EmptyInput` - no probe was supplied
    fn match_order(&self, probe: Option<&Order>) -> RepositoryResult<Vec<Order>>;

    /// Price-ascending (price, quantity) projection of all processable orders
    /// per side. Zero-quantity orders are included.
    fn market_data_snapshot(&self) -> RepositoryResult<MarketDataSnapshot>;

    /// Release backend resources
    fn close(&self) -> RepositoryResult<()>;
}
