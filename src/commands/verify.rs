//! Verify command - Runs the provider verification harness.

use crate::cli::args::VerifyArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::harness;
use crate::verify::CliVerifier;

/// Execute the verify command
pub async fn execute(args: VerifyArgs, mut config: Config, verbose: bool) -> AppResult<()> {
    if let Some(dir) = args.pact_dir {
        config.pact_dir = dir;
    }
    if let Some(dir) = args.log_dir {
        config.log_dir = dir;
    }
    if let Some(bin) = args.verifier_bin {
        config.verifier_bin = bin;
    }
    config.integrated_tests |= args.integrated;

    tracing::debug!(?config, "Verification configuration");

    let verifier = CliVerifier::new(&config.verifier_bin)
        .with_log_dir(&config.log_dir)
        .with_log_level(if verbose { "debug" } else { "info" });

    let reports = harness::run(&config, &verifier).await?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&reports)
            .map_err(|e| AppError::internal(format!("Failed to render reports: {}", e)))?;
        println!("{}", rendered);
    } else {
        for report in &reports {
            println!("PASSED {} ({} ms)", report.source, report.duration_ms);
        }
    }

    Ok(())
}
