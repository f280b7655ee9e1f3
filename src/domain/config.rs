// ============================================================================
// Repository Configuration
// ============================================================================

use chrono::Duration;

use super::order::default_validity;

/// Configuration for an order repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Market label used in logs (e.g., "EQUITIES", "BTC-USD")
    pub market: String,

    /// Deadline applied to new orders that do not carry one
    pub default_validity: Duration,

    /// Pre-allocated entries per side
    pub initial_capacity: usize,
}

impl RepositoryConfig {
    pub fn new(market: String) -> Self {
        Self {
            market,
            default_validity: default_validity(),
            initial_capacity: 0,
        }
    }

    /// Builder method: Set the default validity for new orders
    pub fn with_default_validity(mut self, validity: Duration) -> Self {
        self.default_validity = validity;
        self
    }

    /// Builder method: Pre-allocate both sides
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.market.is_empty() {
            return Err("Market cannot be empty".to_string());
        }

        if self.default_validity <= Duration::zero() {
            return Err("Default validity must be positive".to_string());
        }

        Ok(())
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self::new("DEFAULT".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = RepositoryConfig::new("EQUITIES".to_string());

        assert_eq!(config.market, "EQUITIES");
        assert_eq!(config.default_validity, Duration::days(90));
        assert_eq!(config.initial_capacity, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RepositoryConfig::new("EQUITIES".to_string())
            .with_default_validity(Duration::days(1))
            .with_initial_capacity(1024);

        assert_eq!(config.default_validity, Duration::days(1));
        assert_eq!(config.initial_capacity, 1024);
    }

    #[test]
    fn test_validation() {
        let empty_market = RepositoryConfig::new(String::new());
        assert!(empty_market.validate().is_err());

        let zero_validity = RepositoryConfig::default().with_default_validity(Duration::zero());
        assert!(zero_validity.validate().is_err());

        let negative_validity =
            RepositoryConfig::default().with_default_validity(Duration::hours(-1));
        assert!(negative_validity.validate().is_err());
    }
}
