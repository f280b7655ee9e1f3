// ============================================================================
// Engine Module
// Contains the repository implementation and its read-path algorithms
// ============================================================================

mod in_memory;

pub mod factory;
pub mod matcher;
pub mod snapshot;

pub use factory::{create_from_config, OrderRepositoryBuilder};
pub use in_memory::InMemoryOrderRepository;
pub use matcher::{collect_matches, prices_cross};
pub use snapshot::build_snapshot;
