//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module.

pub mod serve;
pub mod verify;
