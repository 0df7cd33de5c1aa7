//! Repository layer - Data access abstraction
//!
//! The login endpoint reads users through `UserRepository`, so the
//! fixture store and test mocks can stand in for each other.

mod user_repository;

pub use user_repository::{InMemoryUserRepository, UserRepository};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
