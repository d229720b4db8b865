//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Retrying the
/// same operation without changing state reproduces the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An allocation was rejected: the sku does not match or the batch does
    /// not have enough available quantity.
    #[error("out of stock: {0}")]
    OutOfStock(String),

    /// A domain invariant was violated (e.g. a restored snapshot is inconsistent).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn out_of_stock(msg: impl Into<String>) -> Self {
        Self::OutOfStock(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Whether this is an allocation rejection.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, Self::OutOfStock(_))
    }
}
