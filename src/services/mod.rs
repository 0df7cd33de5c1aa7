//! Application services layer - Use cases.
//!
//! Services depend on abstractions (traits) so handlers and tests can
//! swap implementations.

pub mod container;
mod login_service;
mod state_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use login_service::{Authenticator, LoginService};
pub use state_service::{ProviderStateService, StateManager};

#[cfg(any(test, feature = "test-utils"))]
pub use state_service::MockProviderStateService;
