// ============================================================================
// Repository Errors
// Error taxonomy surfaced by every order repository implementation
// ============================================================================

use thiserror::Error;

/// Errors returned by [`OrderRepository`](super::OrderRepository) operations.
///
/// `EmptyInput` and `ZeroIdentity` are validation errors: the argument was
/// structurally invalid and nothing was touched. `NotFound` means the
/// identity does not name a currently processable order, whether it never
/// existed, was disabled, or has expired.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryError {
    #[error("no empty input")]
    EmptyInput,

    #[error("no zero id")]
    ZeroIdentity,

    #[error("order does not exist")]
    NotFound,
}

impl RepositoryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RepositoryError::EmptyInput | RepositoryError::ZeroIdentity)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound)
    }
}

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
