//! Verifier backed by the external `pact_verifier_cli` executable.

use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::request::is_remote;
use super::{VerificationReport, Verifier, VerifyRequest};
use crate::config::{BROKER_PASSWORD_ENV, VERIFY_LOG_FILE};
use crate::errors::{AppError, AppResult};

/// Runs the verification engine as a child process.
#[derive(Debug, Clone)]
pub struct CliVerifier {
    binary: String,
    log_dir: Option<PathBuf>,
    log_level: String,
}

impl CliVerifier {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            log_dir: None,
            log_level: "info".to_string(),
        }
    }

    /// Append engine output to `<dir>/verify.log` after every run
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Command-line arguments for `request`.
    pub fn command_args(&self, request: &VerifyRequest) -> AppResult<Vec<String>> {
        request.validate()?;
        let base = request.base_url()?;

        let mut args = vec![
            "--loglevel".to_string(),
            self.log_level.clone(),
            "--scheme".to_string(),
            base.scheme().to_string(),
            "--hostname".to_string(),
            base.host_str().unwrap_or_default().to_string(),
        ];

        if let Some(port) = base.port_or_known_default() {
            args.push("--port".to_string());
            args.push(port.to_string());
        }

        let path = base.path().trim_end_matches('/');
        if !path.is_empty() {
            args.push("--base-path".to_string());
            args.push(path.to_string());
        }

        for location in &request.pact_urls {
            let flag = if is_remote(location) { "--url" } else { "--file" };
            args.push(flag.to_string());
            args.push(location.clone());
        }

        if let Some(broker) = &request.broker_url {
            args.push("--broker-url".to_string());
            args.push(broker.clone());
        }

        if let Some(name) = &request.provider_name {
            args.push("--provider-name".to_string());
            args.push(name.clone());
        }

        if let Some(setup) = &request.provider_states_setup_url {
            args.push("--state-change-url".to_string());
            args.push(setup.clone());
        }

        // The password travels in the child's environment, see `command`
        if let Some(user) = &request.broker_username {
            args.push("--user".to_string());
            args.push(user.clone());
        }

        if !request.tags.is_empty() {
            args.push("--consumer-version-tags".to_string());
            args.push(request.tags.join(","));
        }

        if request.publish_verification_results {
            args.push("--publish".to_string());
        }

        if let Some(version) = &request.provider_version {
            args.push("--provider-version".to_string());
            args.push(version.clone());
        }

        Ok(args)
    }

    /// Engine invocation for `request`. The broker password is passed as
    /// `PACT_BROKER_PASSWORD` so it never shows up in the process list.
    pub fn command(&self, request: &VerifyRequest) -> AppResult<Command> {
        let mut command = Command::new(&self.binary);
        command.args(self.command_args(request)?);
        if let Some(password) = request.broker_password() {
            command.env(BROKER_PASSWORD_ENV, password);
        }
        Ok(command)
    }

    async fn append_log(&self, dir: &Path, report: &VerificationReport) -> AppResult<()> {
        tokio::fs::create_dir_all(dir).await?;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(VERIFY_LOG_FILE))
            .await?;

        let header = format!(
            "=== {} (passed: {}, exit: {:?}, {} ms)\n",
            report.source, report.passed, report.exit_code, report.duration_ms
        );
        file.write_all(header.as_bytes()).await?;
        file.write_all(report.output.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl Verifier for CliVerifier {
    async fn verify(&self, request: &VerifyRequest) -> AppResult<VerificationReport> {
        let mut command = self.command(request)?;
        let source = request.describe();

        tracing::info!(binary = %self.binary, %source, "Running provider verification");
        let start = Instant::now();

        let output = command
            .output()
            .await
            .map_err(|e| {
                AppError::verification(format!("failed to run {}: {}", self.binary, e))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        let report = VerificationReport {
            source,
            passed: output.status.success(),
            exit_code: output.status.code(),
            duration_ms: start.elapsed().as_millis() as u64,
            output: format!("{}{}", stdout, stderr),
        };

        if report.passed {
            tracing::info!(source = %report.source, duration_ms = report.duration_ms, "Verification passed");
        } else {
            tracing::error!(
                source = %report.source,
                exit_code = ?report.exit_code,
                "Verification failed:\n{}",
                report.output
            );
        }

        if let Some(dir) = &self.log_dir {
            self.append_log(dir, &report).await?;
        }

        Ok(report)
    }
}
