//! The authorization decision function.

use crate::context::SecurityContext;
use crate::scope::Scope;
use std::fmt;

/// Why a request was denied. For diagnostics only; never shown to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No principal attached to the context.
    Anonymous,
    /// Principal present but does not hold the required scope.
    MissingAuthority,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("anonymous"),
            Self::MissingAuthority => f.write_str("missing_authority"),
        }
    }
}

/// Outcome of [`decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Grant,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Grant)
    }
}

/// Grant iff the context has a principal holding `required`.
///
/// Plain set membership: no hierarchy, no wildcards, no implication between
/// scopes. Pure and side-effect free.
#[must_use]
pub fn decide(required: &Scope, context: &SecurityContext) -> Decision {
    match context.principal() {
        None => Decision::Deny(DenyReason::Anonymous),
        Some(principal) if principal.holds(required) => Decision::Grant,
        Some(_) => Decision::Deny(DenyReason::MissingAuthority),
    }
}
