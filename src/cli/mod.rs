//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the instrumented provider
//! - `verify` - Verify the provider against its pacts

pub mod args;

pub use args::{Cli, Commands};
