//! Provider state service - Applies provider states to the fixture store.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{FixtureKind, ProviderState, User};
use crate::errors::AppResult;
use crate::infra::{FixtureStore, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Provider state service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProviderStateService: Send + Sync {
    /// Switch the provider into `state` and return the fixture now active.
    ///
    /// Teardown requests leave the current fixture in place.
    async fn apply(&self, state: &ProviderState) -> AppResult<FixtureKind>;

    /// Fixture currently answering login requests
    async fn active(&self) -> FixtureKind;

    /// Users in the active fixture, ordered by username
    async fn users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of ProviderStateService.
pub struct StateManager {
    fixtures: Arc<FixtureStore>,
}

impl StateManager {
    pub fn new(fixtures: Arc<FixtureStore>) -> Self {
        Self { fixtures }
    }
}

#[async_trait]
impl ProviderStateService for StateManager {
    async fn apply(&self, state: &ProviderState) -> AppResult<FixtureKind> {
        if state.is_teardown() {
            tracing::debug!(state = state.name(), "Ignoring provider state teardown");
            return Ok(self.fixtures.active().await);
        }

        let kind = FixtureKind::from_state(state.name());
        self.fixtures.select(kind).await;

        tracing::info!(
            state = state.name(),
            fixture = ?kind,
            params = ?state.params,
            "Provider state applied"
        );

        Ok(kind)
    }

    async fn active(&self) -> FixtureKind {
        self.fixtures.active().await
    }

    async fn users(&self) -> AppResult<Vec<User>> {
        self.fixtures.list().await
    }
}
