//! Security context and the accessor the facade queries at call time.

use crate::scope::Authority;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An authenticated caller and the authorities it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    name: String,
    authorities: BTreeSet<Authority>,
}

impl Principal {
    /// Create a principal holding no authorities.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            authorities: BTreeSet::new(),
        }
    }

    pub fn with_authority(mut self, authority: Authority) -> Self {
        self.authorities.insert(authority);
        self
    }

    pub fn with_authorities(mut self, authorities: impl IntoIterator<Item = Authority>) -> Self {
        self.authorities.extend(authorities);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn authorities(&self) -> &BTreeSet<Authority> {
        &self.authorities
    }

    /// Whether `authority` is among the held authorities (exact match).
    pub fn holds(&self, authority: &Authority) -> bool {
        self.authorities.contains(authority)
    }
}

/// The current call's principal, or nothing at all.
///
/// An empty context (no principal) is different from a principal with no
/// authorities, although both are denied every scope.
///
/// Established by an external authentication layer; read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityContext {
    principal: Option<Principal>,
}

impl SecurityContext {
    /// A context with no principal attached.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn authenticated(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.principal.is_none()
    }
}

impl From<Principal> for SecurityContext {
    fn from(principal: Principal) -> Self {
        Self::authenticated(principal)
    }
}

/// Pull-based lookup of the security context for the call in progress.
///
/// Called once per operation, synchronously, before anything is forwarded.
/// Implementations must return the context as established for the current
/// call and must not cache it across calls.
///
/// A [`SecurityContext`] is its own accessor, which is how a request handler
/// injects an explicit per-request context. Closures returning a context are
/// accessors too.
pub trait SecurityContextAccessor: Send + Sync {
    fn current_context(&self) -> SecurityContext;
}

impl SecurityContextAccessor for SecurityContext {
    fn current_context(&self) -> SecurityContext {
        self.clone()
    }
}

impl<F> SecurityContextAccessor for F
where
    F: Fn() -> SecurityContext + Send + Sync,
{
    fn current_context(&self) -> SecurityContext {
        self()
    }
}
