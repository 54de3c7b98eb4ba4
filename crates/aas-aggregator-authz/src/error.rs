//! Error types for the authorization layer.
//!
//! Denials raised by the facade are reported as
//! [`AggregatorError::Unauthorized`](aas_aggregator::AggregatorError::Unauthorized)
//! so the facade keeps the wrapped aggregator's signature. [`AuthzError`]
//! covers setup mistakes only.

/// Errors that can occur while configuring the authorization layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthzError {
    /// Scope token is empty or contains characters outside the OAuth2
    /// `scope-token` syntax (RFC 6749, section 3.3), such as whitespace,
    /// `"` or `\`.
    #[error("Invalid scope token: {0:?}")]
    InvalidScope(String),

    /// The facade was built without a security context accessor.
    #[error("A security context accessor is required")]
    MissingContextAccessor,
}
