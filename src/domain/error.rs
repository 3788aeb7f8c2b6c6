//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the tree's input contract.
/// These are independent of I/O concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("row length mismatch: {names} names vs {categories} categories")]
    LengthMismatch { names: usize, categories: usize },

    #[error("empty name at row position {position}")]
    EmptyName { position: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
