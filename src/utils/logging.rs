// ============================================================================
// Logging Setup
// tracing-subscriber initialisation for binaries and demos
// ============================================================================
//
// # Usage
//
// ```ignore
// use order_repository::utils::init_logging;
//
// init_logging().ok();
// ```
//
// RUST_LOG takes precedence, e.g. `RUST_LOG=order_repository=trace`.

use tracing_subscriber::EnvFilter;

/// Directive used when RUST_LOG is unset or unparsable
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Install a global fmt subscriber filtered by RUST_LOG (default `info`).
///
/// Fails if a global subscriber is already set.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging_with_default(DEFAULT_LOG_DIRECTIVE)
}

pub fn init_logging_with_default(
    default_directive: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}
