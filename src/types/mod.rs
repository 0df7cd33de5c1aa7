//! Shared response types.

mod response;

pub use response::{Empty, ProviderResult, StatusOnly};
