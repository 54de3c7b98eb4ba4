//! AuthorizedAggregator - scope-enforcing facade over an aggregator.
//!
//! Every operation is checked against the caller's security context before
//! it reaches the wrapped aggregator. A denied call never reaches it.

use crate::context::{Principal, SecurityContext, SecurityContextAccessor};
use crate::decision::Decision;
use crate::error::AuthzError;
use crate::operation::AggregatorOperation;
use crate::policy::{AuthorizationPolicy, ScopeMembershipPolicy};
use aas_aggregator::{AasAggregator, AggregatorError, Identifier, Shell};
use async_trait::async_trait;
use std::sync::Arc;

/// Facade exposing the same operations as the aggregator it wraps.
///
/// Each operation maps to one required scope (see [`AggregatorOperation`]).
/// On grant the call is forwarded once, with its arguments and result
/// untouched. On deny it fails with [`AggregatorError::Unauthorized`] and the
/// wrapped aggregator is not invoked.
///
/// # Example
///
/// ```rust,ignore
/// use aas_aggregator::{AasAggregator, InMemoryAggregator, Shell};
/// use aas_aggregator_authz::{AuthorizedAggregator, Principal, SecurityContext, WRITE_SCOPE};
///
/// let ctx = SecurityContext::authenticated(Principal::new("alice").with_authority(WRITE_SCOPE));
/// let aggregator = AuthorizedAggregator::new(InMemoryAggregator::new(), ctx);
///
/// aggregator.create_aas(Shell::new("pump", "urn:plant:pump:1")).await?;
/// ```
pub struct AuthorizedAggregator<A, C> {
    inner: A,
    contexts: C,
    policy: Arc<dyn AuthorizationPolicy>,
}

impl<A, C> AuthorizedAggregator<A, C> {
    /// Wrap `inner`, reading the caller's context from `contexts` and
    /// deciding with [`ScopeMembershipPolicy`].
    pub fn new(inner: A, contexts: C) -> Self {
        Self {
            inner,
            contexts,
            policy: Arc::new(ScopeMembershipPolicy),
        }
    }

    /// Create a builder for custom configuration.
    pub fn builder(inner: A) -> AuthorizedAggregatorBuilder<A, C> {
        AuthorizedAggregatorBuilder::new(inner)
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn into_inner(self) -> A {
        self.inner
    }

    /// Borrow this facade with an explicit per-request context.
    ///
    /// The wrapped aggregator and policy are shared; only the context source
    /// differs.
    pub fn with_context(
        &self,
        context: SecurityContext,
    ) -> AuthorizedAggregator<&A, SecurityContext> {
        AuthorizedAggregator {
            inner: &self.inner,
            contexts: context,
            policy: Arc::clone(&self.policy),
        }
    }
}

impl<A, C: SecurityContextAccessor> AuthorizedAggregator<A, C> {
    /// Run the policy check for `operation` against the current context.
    fn authorize(&self, operation: AggregatorOperation) -> Result<(), AggregatorError> {
        let required = operation.required_scope();
        let context = self.contexts.current_context();
        let principal = context.principal().map_or("<anonymous>", Principal::name);

        match self.policy.decide(&required, &context) {
            Decision::Grant => {
                tracing::debug!(%operation, scope = %required, principal, "authorization granted");
                Ok(())
            }
            Decision::Deny(reason) => {
                tracing::debug!(
                    %operation,
                    scope = %required,
                    principal,
                    %reason,
                    "authorization denied"
                );
                Err(AggregatorError::Unauthorized)
            }
        }
    }
}

#[async_trait]
impl<A, C> AasAggregator for AuthorizedAggregator<A, C>
where
    A: AasAggregator,
    C: SecurityContextAccessor,
{
    async fn create_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        self.authorize(AggregatorOperation::Create)?;
        self.inner.create_aas(shell).await
    }

    async fn update_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        self.authorize(AggregatorOperation::Update)?;
        self.inner.update_aas(shell).await
    }

    async fn delete_aas(&self, id: &Identifier) -> Result<(), AggregatorError> {
        self.authorize(AggregatorOperation::Delete)?;
        self.inner.delete_aas(id).await
    }

    async fn get_aas(&self, id: &Identifier) -> Result<Shell, AggregatorError> {
        self.authorize(AggregatorOperation::GetOne)?;
        self.inner.get_aas(id).await
    }

    async fn get_aas_list(&self) -> Result<Vec<Shell>, AggregatorError> {
        self.authorize(AggregatorOperation::GetAll)?;
        self.inner.get_aas_list().await
    }
}

/// Builder for creating custom AuthorizedAggregator configurations.
pub struct AuthorizedAggregatorBuilder<A, C> {
    inner: A,
    contexts: Option<C>,
    policy: Option<Arc<dyn AuthorizationPolicy>>,
}

impl<A, C> AuthorizedAggregatorBuilder<A, C> {
    fn new(inner: A) -> Self {
        Self {
            inner,
            contexts: None,
            policy: None,
        }
    }

    /// Set where the caller's security context is read from (required).
    pub fn with_context_accessor(mut self, contexts: C) -> Self {
        self.contexts = Some(contexts);
        self
    }

    /// Set a custom authorization policy.
    pub fn with_policy(mut self, policy: impl AuthorizationPolicy + 'static) -> Self {
        self.policy = Some(Arc::new(policy));
        self
    }

    /// Build the AuthorizedAggregator instance.
    pub fn build(self) -> Result<AuthorizedAggregator<A, C>, AuthzError> {
        let contexts = self.contexts.ok_or(AuthzError::MissingContextAccessor)?;

        Ok(AuthorizedAggregator {
            inner: self.inner,
            contexts,
            policy: self
                .policy
                .unwrap_or_else(|| Arc::new(ScopeMembershipPolicy)),
        })
    }
}
