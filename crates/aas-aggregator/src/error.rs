//! Aggregator error types.

use crate::shell::Identifier;

/// Errors returned by an [`AasAggregator`](crate::AasAggregator).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregatorError {
    /// No shell is registered under the identifier.
    #[error("Shell not found: {0}")]
    NotFound(Identifier),

    /// A shell is already registered under the identifier.
    #[error("Shell already exists: {0}")]
    AlreadyExists(Identifier),

    /// The caller is not authorized for the operation.
    ///
    /// Deliberately carries no detail about which check failed.
    #[error("Not authorized for this operation")]
    Unauthorized,

    /// Failure inside the aggregator's backing store.
    #[error("Backend error: {0}")]
    Backend(String),
}

impl AggregatorError {
    /// Whether this error is an authorization denial.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
