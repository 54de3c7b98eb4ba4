//! Shared fixtures for facade integration tests.

#![allow(dead_code)]

use aas_aggregator::{AasAggregator, AggregatorError, Identifier, Shell};
use aas_aggregator_authz::{Principal, Scope, SecurityContext};
use async_trait::async_trait;
use std::sync::Mutex;

/// A call observed by [`RecordingAggregator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(Shell),
    Update(Shell),
    Delete(Identifier),
    GetOne(Identifier),
    GetAll,
}

/// Aggregator double that records every call and replays canned results.
#[derive(Default)]
pub struct RecordingAggregator {
    calls: Mutex<Vec<Call>>,
    shell: Option<Shell>,
    shells: Vec<Shell>,
    failure: Option<AggregatorError>,
}

impl RecordingAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shell returned by `get_aas`; without one, `get_aas` fails with `NotFound`.
    pub fn returning_shell(mut self, shell: Shell) -> Self {
        self.shell = Some(shell);
        self
    }

    pub fn returning_shells(mut self, shells: Vec<Shell>) -> Self {
        self.shells = shells;
        self
    }

    /// Every call fails with `error` after being recorded.
    pub fn failing_with(mut self, error: AggregatorError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), AggregatorError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AasAggregator for RecordingAggregator {
    async fn create_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        self.record(Call::Create(shell))
    }

    async fn update_aas(&self, shell: Shell) -> Result<(), AggregatorError> {
        self.record(Call::Update(shell))
    }

    async fn delete_aas(&self, id: &Identifier) -> Result<(), AggregatorError> {
        self.record(Call::Delete(id.clone()))
    }

    async fn get_aas(&self, id: &Identifier) -> Result<Shell, AggregatorError> {
        self.record(Call::GetOne(id.clone()))?;
        self.shell
            .clone()
            .ok_or_else(|| AggregatorError::NotFound(id.clone()))
    }

    async fn get_aas_list(&self) -> Result<Vec<Shell>, AggregatorError> {
        self.record(Call::GetAll)?;
        Ok(self.shells.clone())
    }
}

pub fn shell(id_short: &str, id: &str) -> Shell {
    Shell::new(id_short, id)
}

pub fn context_with(authorities: impl IntoIterator<Item = Scope>) -> SecurityContext {
    SecurityContext::authenticated(Principal::new("test-user").with_authorities(authorities))
}

pub fn context_without_authorities() -> SecurityContext {
    SecurityContext::authenticated(Principal::new("test-user"))
}
