//! Static mapping from aggregator operations to required scopes.

use crate::scope::{Scope, READ_SCOPE, WRITE_SCOPE};
use std::fmt;

/// An operation exposed by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregatorOperation {
    Create,
    Update,
    Delete,
    GetOne,
    GetAll,
}

impl AggregatorOperation {
    pub const ALL: [AggregatorOperation; 5] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::GetOne,
        Self::GetAll,
    ];

    /// The single scope a caller must hold to perform this operation.
    pub fn required_scope(self) -> Scope {
        match self {
            Self::Create | Self::Update | Self::Delete => WRITE_SCOPE,
            Self::GetOne | Self::GetAll => READ_SCOPE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "create_aas",
            Self::Update => "update_aas",
            Self::Delete => "delete_aas",
            Self::GetOne => "get_aas",
            Self::GetAll => "get_aas_list",
        }
    }
}

impl fmt::Display for AggregatorOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
