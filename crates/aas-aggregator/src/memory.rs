//! Map-backed aggregator.

use crate::aggregator::AasAggregator;
use crate::error::AggregatorError;
use crate::shell::{Identifier, Shell};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Aggregator that keeps every shell in process memory.
///
/// Shells are keyed by identifier, so [`get_aas_list`](AasAggregator::get_aas_list)
/// returns them ordered by identifier.
#[derive(Debug, Default)]
pub struct InMemoryAggregator {
    shells: RwLock<BTreeMap<Identifier, Shell>>,
}

impl InMemoryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator pre-populated with `shells`.
    ///
    /// Later shells replace earlier ones with the same identifier.
    pub fn with_shells(shells: impl IntoIterator<Item = Shell>) -> Self {
        let shells = shells
            .into_iter()
            .map(|shell| (shell.identification.clone(), shell))
            .collect();
        Self {
            shells: RwLock::new(shells),
        }
    }

    pub async fn len(&self) -> usize {
        self.shells.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.shells.read().await.is_empty()
    }
}

#[async_trait]
impl AasAggregator for InMemoryAggregator {
    async fn create_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        let mut shells = self.shells.write().await;
        if shells.contains_key(&shell.identification) {
            return Err(AggregatorError::AlreadyExists(shell.identification));
        }

        tracing::trace!(id = %shell.identification, "shell created");
        shells.insert(shell.identification.clone(), shell);
        Ok(())
    }

    async fn update_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        let mut shells = self.shells.write().await;
        match shells.get_mut(&shell.identification) {
            Some(existing) => {
                tracing::trace!(id = %shell.identification, "shell updated");
                *existing = shell;
                Ok(())
            }
            None => Err(AggregatorError::NotFound(shell.identification)),
        }
    }

    async fn delete_aas(&self, id: &Identifier) -> Result<(), AggregatorError> {
        match self.shells.write().await.remove(id) {
            Some(_) => {
                tracing::trace!(id = %id, "shell deleted");
                Ok(())
            }
            None => Err(AggregatorError::NotFound(id.clone())),
        }
    }

    async fn get_aas(&self, id: &Identifier) -> Result<Shell, AggregatorError> {
        self.shells
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AggregatorError::NotFound(id.clone()))
    }

    async fn get_aas_list(&self) -> Result<Vec<Shell>, AggregatorError> {
        Ok(self.shells.read().await.values().cloned().collect())
    }
}
