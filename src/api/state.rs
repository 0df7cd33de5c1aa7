//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::FixtureStore;
use crate::services::{ServiceContainer, Services};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceContainer>,
}

impl AppState {
    /// Create application state with manually injected services.
    pub fn new(services: Arc<dyn ServiceContainer>) -> Self {
        Self { services }
    }

    /// Create application state whose services read and swap `fixtures`.
    pub fn from_fixtures(fixtures: Arc<FixtureStore>) -> Self {
        Self::new(Arc::new(Services::from_fixtures(fixtures)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(Services::default()))
    }
}
