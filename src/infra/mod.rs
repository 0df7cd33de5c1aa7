//! Infrastructure layer - Data sources
//!
//! This module handles the provider's storage concerns:
//! - In-memory user repositories
//! - Provider-state fixture datasets and the store that swaps them

pub mod fixtures;
pub mod repositories;

pub use fixtures::FixtureStore;
pub use repositories::{InMemoryUserRepository, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
