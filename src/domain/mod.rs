// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod market_data;
pub mod order;

pub use config::RepositoryConfig;
pub use market_data::{MarketDataSnapshot, OrderSnapshot};
pub use order::{Order, OrderDetails, OrderId, OrderKind, Side};

// Re-export derived state
pub use order::state::OrderState;
