//! # AAS Aggregator Authorization
//!
//! Scope-based enforcement point in front of an [`AasAggregator`].
//!
//! ## Overview
//!
//! [`AuthorizedAggregator`] implements the same [`AasAggregator`] capability
//! set as the aggregator it wraps. Each call:
//!
//! 1. Maps the operation to its required scope ([`AggregatorOperation`])
//! 2. Reads the caller's [`SecurityContext`] from a [`SecurityContextAccessor`]
//! 3. Asks the [`AuthorizationPolicy`] for a [`Decision`]
//! 4. Forwards unchanged on grant, or fails with
//!    [`AggregatorError::Unauthorized`] without touching the wrapped aggregator
//!
//! | Operation | Required scope |
//! |-----------|----------------|
//! | `create_aas`, `update_aas`, `delete_aas` | [`WRITE_SCOPE`] |
//! | `get_aas`, `get_aas_list` | [`READ_SCOPE`] |
//!
//! Authentication is out of scope: the context is established upstream and
//! only read here.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aas_aggregator::{AasAggregator, Identifier, InMemoryAggregator};
//! use aas_aggregator_authz::{AuthorizedAggregator, Principal, SecurityContext, READ_SCOPE};
//!
//! let shared = AuthorizedAggregator::new(InMemoryAggregator::new(), SecurityContext::empty());
//!
//! // Per request: bind the context the authentication layer produced.
//! let ctx = SecurityContext::authenticated(Principal::new("alice").with_authority(READ_SCOPE));
//! let shells = shared.with_context(ctx).get_aas_list().await?;
//! ```
//!
//! ## Custom Policy
//!
//! ```rust,ignore
//! use aas_aggregator_authz::{AuthorizationPolicy, Decision, DenyReason, Scope, SecurityContext};
//!
//! struct ReadOnly;
//!
//! impl AuthorizationPolicy for ReadOnly {
//!     fn decide(&self, required: &Scope, context: &SecurityContext) -> Decision {
//!         if *required == aas_aggregator_authz::READ_SCOPE {
//!             aas_aggregator_authz::decide(required, context)
//!         } else {
//!             Decision::Deny(DenyReason::MissingAuthority)
//!         }
//!     }
//! }
//! ```

pub mod authorized;
pub mod context;
pub mod decision;
pub mod error;
pub mod operation;
pub mod policy;
pub mod scope;

// Primary exports
pub use authorized::{AuthorizedAggregator, AuthorizedAggregatorBuilder};
pub use context::{Principal, SecurityContext, SecurityContextAccessor};
pub use decision::{decide, Decision, DenyReason};
pub use error::AuthzError;
pub use operation::AggregatorOperation;
pub use policy::{AuthorizationPolicy, ScopeMembershipPolicy};
pub use scope::{catalog, Authority, Scope, READ_SCOPE, WRITE_SCOPE};

// Re-export the wrapped capability so callers need a single import
pub use aas_aggregator::{AasAggregator, AggregatorError, Identifier, Shell};
