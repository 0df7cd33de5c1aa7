//! Domain layer - Core entities and value objects
//!
//! Users, login payloads and the provider states that select which
//! fixture dataset the login endpoint answers from.

pub mod provider_state;
pub mod user;

pub use provider_state::{FixtureKind, ProviderState, StateAction};
pub use user::{LoginRequest, LoginResponse, User, UserType};
