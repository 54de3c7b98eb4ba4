//! The aggregator capability set.

use crate::error::AggregatorError;
use crate::shell::{Identifier, Shell};
use async_trait::async_trait;
use std::sync::Arc;

/// Manages a collection of uniquely identified shells.
///
/// Decorators (authorization, caching, ...) implement this trait themselves
/// and hold the aggregator they wrap, so they can be stacked freely.
#[async_trait]
pub trait AasAggregator: Send + Sync {
    /// Register a new shell.
    async fn create_aas(&self, shell: Shell) -> Result<(), AggregatorError>;

    /// Replace an existing shell with the same identifier.
    async fn update_aas(&self, shell: Shell) -> Result<(), AggregatorError>;

    /// Remove the shell registered under `id`.
    async fn delete_aas(&self, id: &Identifier) -> Result<(), AggregatorError>;

    /// Fetch the shell registered under `id`.
    async fn get_aas(&self, id: &Identifier) -> Result<Shell, AggregatorError>;

    /// Fetch every registered shell.
    async fn get_aas_list(&self) -> Result<Vec<Shell>, AggregatorError>;
}

#[async_trait]
impl<T: AasAggregator + ?Sized> AasAggregator for &T {
    async fn create_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        (**self).create_aas(shell).await
    }

    async fn update_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        (**self).update_aas(shell).await
    }

    async fn delete_aas(&self, id: &Identifier) -> Result<(), AggregatorError> {
        (**self).delete_aas(id).await
    }

    async fn get_aas(&self, id: &Identifier) -> Result<Shell, AggregatorError> {
        (**self).get_aas(id).await
    }

    async fn get_aas_list(&self) -> Result<Vec<Shell>, AggregatorError> {
        (**self).get_aas_list().await
    }
}

#[async_trait]
impl<T: AasAggregator + ?Sized> AasAggregator for Box<T> {
    async fn create_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        (**self).create_aas(shell).await
    }

    async fn update_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        (**self).update_aas(shell).await
    }

    async fn delete_aas(&self, id: &Identifier) -> Result<(), AggregatorError> {
        (**self).delete_aas(id).await
    }

    async fn get_aas(&self, id: &Identifier) -> Result<Shell, AggregatorError> {
        (**self).get_aas(id).await
    }

    async fn get_aas_list(&self) -> Result<Vec<Shell>, AggregatorError> {
        (**self).get_aas_list().await
    }
}

#[async_trait]
impl<T: AasAggregator + ?Sized> AasAggregator for Arc<T> {
    async fn create_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        (**self).create_aas(shell).await
    }

    async fn update_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        (**self).update_aas(shell).await
    }

    async fn delete_aas(&self, id: &Identifier) -> Result<(), AggregatorError> {
        (**self).delete_aas(id).await
    }

    async fn get_aas(&self, id: &Identifier) -> Result<Shell, AggregatorError> {
        (**self).get_aas(id).await
    }

    async fn get_aas_list(&self) -> Result<Vec<Shell>, AggregatorError> {
        (**self).get_aas_list().await
    }
}
