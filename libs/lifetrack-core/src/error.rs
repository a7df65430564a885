//! Domain validation errors.

use thiserror::Error;

/// Validation failures for domain rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("maximum subtask depth reached")]
    MaxDepthExceeded,

    #[error("parent todo not found")]
    ParentNotFound,

    #[error("distance must be greater than zero")]
    ZeroDistance,
}

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
