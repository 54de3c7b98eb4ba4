//! Pluggable authorization policy.

use crate::context::SecurityContext;
use crate::decision::{decide, Decision};
use crate::scope::Scope;

/// Decides whether a context satisfies a required scope.
///
/// Implement this trait to swap in custom access control. Implementations
/// must stay pure: same inputs, same decision, no side effects.
pub trait AuthorizationPolicy: Send + Sync {
    fn decide(&self, required: &Scope, context: &SecurityContext) -> Decision;
}

/// Default policy: grant iff the principal holds the required scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeMembershipPolicy;

impl AuthorizationPolicy for ScopeMembershipPolicy {
    fn decide(&self, required: &Scope, context: &SecurityContext) -> Decision {
        decide(required, context)
    }
}
