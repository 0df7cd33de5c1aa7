//! Service Container - Centralized service access.
//!
//! Both services share one `FixtureStore`: the state service writes the
//! selected fixture, the login service reads it.

use std::sync::Arc;

use super::{Authenticator, LoginService, ProviderStateService, StateManager};
use crate::infra::FixtureStore;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get login service
    fn login(&self) -> Arc<dyn LoginService>;

    /// Get provider state service
    fn states(&self) -> Arc<dyn ProviderStateService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    login_service: Arc<dyn LoginService>,
    state_service: Arc<dyn ProviderStateService>,
}

impl Services {
    /// Create a service container from already-built services
    pub fn new(
        login_service: Arc<dyn LoginService>,
        state_service: Arc<dyn ProviderStateService>,
    ) -> Self {
        Self {
            login_service,
            state_service,
        }
    }

    /// Wire both services to a shared fixture store
    pub fn from_fixtures(fixtures: Arc<FixtureStore>) -> Self {
        Self {
            login_service: Arc::new(Authenticator::new(fixtures.clone())),
            state_service: Arc::new(StateManager::new(fixtures)),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::from_fixtures(Arc::new(FixtureStore::default()))
    }
}

impl ServiceContainer for Services {
    fn login(&self) -> Arc<dyn LoginService> {
        self.login_service.clone()
    }

    fn states(&self) -> Arc<dyn ProviderStateService> {
        self.state_service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProviderState;

    #[tokio::test]
    async fn services_share_one_fixture_store() {
        let services = Services::default();

        assert!(services.login().login("jmarie", "issilly").await.is_err());

        services
            .states()
            .apply(&ProviderState::setup("User jmarie exists"))
            .await
            .unwrap();

        let user = services.login().login("jmarie", "issilly").await.unwrap();
        assert_eq!(user.username, "jmarie");
    }
}
