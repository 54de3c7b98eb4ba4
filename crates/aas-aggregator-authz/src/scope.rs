//! Authorization scopes and the process-wide scope catalog.
//!
//! Scopes and authorities share one namespace: a principal holding the
//! authority `WRITE_SCOPE` satisfies an operation that requires
//! `WRITE_SCOPE`. Tokens follow OAuth2 scope syntax
//! (<https://tools.ietf.org/html/rfc6749#section-3.3>).

use crate::error::AuthzError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Named permission class. Two scopes are equal iff their tokens match exactly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scope(Cow<'static, str>);

/// A scope token held by a principal.
pub type Authority = Scope;

impl Scope {
    /// Build a scope from a static token.
    ///
    /// # Panics
    ///
    /// Panics if `token` is not a valid scope token. All callers are `const`
    /// items, where this is a compile error instead.
    pub(crate) const fn from_static(token: &'static str) -> Self {
        if !is_scope_token(token) {
            panic!("invalid scope token");
        }
        Self(Cow::Borrowed(token))
    }

    /// Build a scope from a runtime token, e.g. one issued by an identity
    /// provider.
    ///
    /// A raw space-delimited `scope` claim must be split first; it is
    /// rejected here as a single token.
    pub fn new(token: impl Into<String>) -> Result<Self, AuthzError> {
        let token = token.into();
        if !is_scope_token(&token) {
            return Err(AuthzError::InvalidScope(token));
        }
        Ok(Self(Cow::Owned(token)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Scope {
    type Error = AuthzError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::new(token)
    }
}

impl TryFrom<&str> for Scope {
    type Error = AuthzError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        Self::new(token)
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.0.into_owned()
    }
}

/// Required for reading shells (single lookup and listing).
pub const READ_SCOPE: Scope = Scope::from_static("urn:org.eclipse.basyx:scope:aas-aggregator:read");

/// Required for creating, updating and deleting shells.
pub const WRITE_SCOPE: Scope =
    Scope::from_static("urn:org.eclipse.basyx:scope:aas-aggregator:write");

/// `scope-token = 1*( %x21 / %x23-5B / %x5D-7E )` (RFC 6749, section 3.3).
const fn is_scope_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if !matches!(bytes[i], 0x21 | 0x23..=0x5B | 0x5D..=0x7E) {
            return false;
        }
        i += 1;
    }
    true
}

static CATALOG: [Scope; 2] = [READ_SCOPE, WRITE_SCOPE];

/// Every scope defined by this crate.
pub fn catalog() -> &'static [Scope] {
    &CATALOG
}
