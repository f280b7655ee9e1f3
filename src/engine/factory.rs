// ============================================================================
// Order Repository Factory
// Creates repositories with validated configuration
// ============================================================================

use crate::domain::RepositoryConfig;
use crate::engine::InMemoryOrderRepository;
use crate::interfaces::EventHandler;
use chrono::Duration;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an in-memory repository from configuration
///
/// # Arguments
/// * `config` - Repository configuration
/// * `event_handler` - Handler notified of repository mutations
///
/// # Returns
/// * `Result<InMemoryOrderRepository, String>` - Configured repository or error
///
/// # Example
/// ```
/// use order_repository::prelude::*;
/// use order_repository::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = RepositoryConfig::new("EQUITIES".to_string());
/// let repository = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// ```
pub fn create_from_config(
    config: RepositoryConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<InMemoryOrderRepository, String> {
    config.validate()?;

    info!(
        market = %config.market,
        default_validity_secs = config.default_validity.num_seconds(),
        initial_capacity = config.initial_capacity,
        "creating in-memory order repository"
    );

    Ok(InMemoryOrderRepository::with_config(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating repositories with fluent API
///
/// # Example
/// ```
/// use order_repository::prelude::*;
/// use order_repository::engine::factory::OrderRepositoryBuilder;
/// use chrono::Duration;
/// use std::sync::Arc;
///
/// let repository = OrderRepositoryBuilder::new("EQUITIES")
///     .with_default_validity(Duration::days(30))
///     .with_initial_capacity(1024)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// ```
pub struct OrderRepositoryBuilder {
    config: RepositoryConfig,
}

impl OrderRepositoryBuilder {
    /// Create a new builder for the specified market
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            config: RepositoryConfig::new(market.into()),
        }
    }

    /// Set the deadline applied to orders created without one
    pub fn with_default_validity(mut self, validity: Duration) -> Self {
        self.config.default_validity = validity;
        self
    }

    /// Pre-allocate both sides
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Build the repository
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<InMemoryOrderRepository, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &RepositoryConfig {
        &self.config
    }
}
