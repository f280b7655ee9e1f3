// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod errors;
mod event_handler;
mod order_repository;

pub use errors::{RepositoryError, RepositoryResult};
pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, RepositoryEvent};
pub use order_repository::OrderRepository;
