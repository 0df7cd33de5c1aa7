//! Verification client.
//!
//! Contract matching happens in an external engine; this module only
//! describes what to verify (`VerifyRequest`) and hands it to a
//! `Verifier`.

mod cli;
mod report;
mod request;

use async_trait::async_trait;

pub use cli::CliVerifier;
pub use report::VerificationReport;
pub use request::VerifyRequest;

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Verifier trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Verify the provider described by `request`.
    ///
    /// A failed verification is reported, not returned as an error;
    /// errors mean the verification could not be run at all.
    async fn verify(&self, request: &VerifyRequest) -> AppResult<VerificationReport>;
}
