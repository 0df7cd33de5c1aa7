//! Outcome of one verification run.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// What was verified (see `VerifyRequest::describe`)
    pub source: String,
    pub passed: bool,
    /// Exit code of the verification engine, `None` if killed by a signal
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
    /// Combined stdout and stderr of the engine
    pub output: String,
}

impl VerificationReport {
    pub fn success(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            passed: true,
            exit_code: Some(0),
            duration_ms: 0,
            output: String::new(),
        }
    }

    pub fn failure(source: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            passed: false,
            exit_code: Some(1),
            duration_ms: 0,
            output: output.into(),
        }
    }
}
