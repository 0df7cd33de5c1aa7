//! Login provider instrumented for consumer-driven contract verification.
//!
//! A small login API whose user data comes from swappable fixture
//! datasets. A provider-state hook (`POST /setup`) selects the dataset
//! before each recorded interaction is replayed by an external
//! verification engine.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, login payloads and provider states
//! - **infra**: In-memory repositories and fixture datasets
//! - **services**: Login and provider-state use cases
//! - **api**: HTTP handlers, extractors and routes
//! - **verify**: Verification requests and the engine runner
//! - **harness**: Starts the provider and runs the verification plan
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Serve the provider, starting in a given state
//! cargo run -- serve --state "User jmarie exists"
//!
//! # Verify against pacts/jmarie-loginprovider.json
//! cargo run -- verify
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod harness;
pub mod infra;
pub mod services;
pub mod types;
pub mod verify;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{FixtureKind, ProviderState, User, UserType};
pub use errors::{AppError, AppResult};
pub use infra::FixtureStore;
