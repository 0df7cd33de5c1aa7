//! Provider verification harness.
//!
//! Starts the instrumented provider on a free loopback port in a
//! background task, then runs every planned verification one after the
//! other against it.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::api::{create_router, AppState};
use crate::config::{Config, BROKER_CONSUMER_TAGS, BROKER_PACT_TAG, LOOPBACK_HOST, SETUP_PATH};
use crate::errors::{AppError, AppResult};
use crate::verify::{VerificationReport, Verifier, VerifyRequest};

/// Provider API running in a background task. Aborted on drop.
pub struct RunningProvider {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl RunningProvider {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn setup_url(&self) -> String {
        format!("{}{}", self.base_url(), SETUP_PATH)
    }

    pub fn shutdown(self) {
        tracing::info!("API stopping: {}", self.addr);
        self.handle.abort();
    }
}

impl Drop for RunningProvider {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Start the provider API with its provider-state hook on a free port.
pub async fn start_instrumented_provider(state: AppState) -> AppResult<RunningProvider> {
    let listener = TcpListener::bind((LOOPBACK_HOST, 0)).await?;
    let addr = listener.local_addr()?;
    let app = create_router(state);

    tracing::info!("API starting: {}", addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("API terminating: {}", e);
        }
    });

    Ok(RunningProvider { addr, handle })
}

/// Verification requests to run against a provider at `base_url`.
///
/// The local pact file is always verified. Published pacts on the broker
/// are verified too when integrated tests are enabled.
pub fn verification_plan(config: &Config, base_url: &str) -> AppResult<Vec<VerifyRequest>> {
    let setup_url = format!("{}{}", base_url, SETUP_PATH);

    let mut plan = vec![VerifyRequest::new(base_url)
        .with_pact_url(config.local_pact_file().to_string_lossy())
        .with_setup_url(&setup_url)
        .for_provider(&config.provider)];

    if !config.integrated_tests {
        tracing::info!("Skipping pulling from broker as PACT_INTEGRATED_TESTS is not set");
        return Ok(plan);
    }

    let broker = config
        .broker
        .url
        .as_deref()
        .map(|url| url.trim_end_matches('/').to_string())
        .ok_or_else(|| {
            AppError::invalid_request("PACT_BROKER_HOST must be set when PACT_INTEGRATED_TESTS is")
        })?;

    let published = || {
        VerifyRequest::new(base_url)
            .with_setup_url(&setup_url)
            .with_credentials(
                config.broker.username.clone(),
                config.broker.password().map(str::to_string),
            )
            .publishing(&config.provider_version)
            .for_provider(&config.provider)
    };

    // Specific published pact
    plan.push(published().with_pact_url(format!(
        "{}/pacts/provider/{}/consumer/{}/latest/{}",
        broker, config.provider, config.consumer, BROKER_PACT_TAG
    )));

    // Latest pacts for any known consumer
    plan.push(published().with_broker(&broker));

    // Tag-based pacts for any known consumer
    plan.push(
        published()
            .with_broker(&broker)
            .with_tags(BROKER_CONSUMER_TAGS.iter().copied()),
    );

    Ok(plan)
}

/// Start the provider and verify it against every planned source.
///
/// Every request runs even after a failure; the error lists each failed
/// source.
pub async fn run(config: &Config, verifier: &dyn Verifier) -> AppResult<Vec<VerificationReport>> {
    let provider = start_instrumented_provider(AppState::default()).await?;
    let plan = verification_plan(config, &provider.base_url())?;

    let mut reports = Vec::with_capacity(plan.len());
    for request in &plan {
        reports.push(verifier.verify(request).await?);
    }

    provider.shutdown();

    let failed: Vec<&str> = reports
        .iter()
        .filter(|r| !r.passed)
        .map(|r| r.source.as_str())
        .collect();

    if !failed.is_empty() {
        return Err(AppError::verification(failed.join("; ")));
    }

    tracing::info!(runs = reports.len(), "Provider verified");
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrokerSettings;
    use crate::verify::MockVerifier;
    use std::path::PathBuf;

    fn config() -> Config {
        Config {
            pact_dir: PathBuf::from("/pacts"),
            ..Config::default()
        }
    }

    fn integrated_config() -> Config {
        Config {
            integrated_tests: true,
            broker: BrokerSettings::new(
                Some("https://broker.example/".to_string()),
                Some("ci".to_string()),
                Some("secret".to_string()),
            ),
            ..config()
        }
    }

    #[test]
    fn plan_without_integrated_tests_is_local_only() {
        let plan = verification_plan(&config(), "http://127.0.0.1:9000").unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].pact_urls, vec!["/pacts/jmarie-loginprovider.json"]);
        assert_eq!(
            plan[0].provider_states_setup_url.as_deref(),
            Some("http://127.0.0.1:9000/setup")
        );
        assert!(!plan[0].publish_verification_results);
        assert!(plan[0].validate().is_ok());
    }

    #[test]
    fn integrated_plan_adds_three_broker_runs() {
        let plan = verification_plan(&integrated_config(), "http://127.0.0.1:9000").unwrap();

        assert_eq!(plan.len(), 4);
        assert_eq!(
            plan[1].pact_urls,
            vec!["https://broker.example/pacts/provider/loginprovider/consumer/jmarie/latest/sit4"]
        );
        assert_eq!(plan[2].broker_url.as_deref(), Some("https://broker.example"));
        assert!(plan[2].tags.is_empty());
        assert_eq!(plan[3].tags, vec!["latest", "sit4"]);

        for request in &plan[1..] {
            assert!(request.publish_verification_results);
            assert_eq!(request.provider_version.as_deref(), Some("1.0.0"));
            assert_eq!(request.broker_username.as_deref(), Some("ci"));
            assert!(request.validate().is_ok());
        }
    }

    #[test]
    fn integrated_plan_requires_broker_host() {
        let config = Config {
            integrated_tests: true,
            ..config()
        };
        assert!(matches!(
            verification_plan(&config, "http://127.0.0.1:9000"),
            Err(AppError::InvalidVerifyRequest(_))
        ));
    }

    #[tokio::test]
    async fn run_verifies_against_the_started_provider() {
        let mut verifier = MockVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .withf(|request| {
                request.provider_base_url.starts_with("http://127.0.0.1:")
                    && request
                        .provider_states_setup_url
                        .as_deref()
                        .is_some_and(|url| url.ends_with("/setup"))
            })
            .returning(|request| Ok(VerificationReport::success(request.describe())));

        let reports = run(&config(), &verifier).await.unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].passed);
    }

    #[tokio::test]
    async fn run_fails_after_running_every_request() {
        let mut verifier = MockVerifier::new();
        verifier
            .expect_verify()
            .times(4)
            .returning(|request| {
                if request.tags.is_empty() {
                    Ok(VerificationReport::success(request.describe()))
                } else {
                    Ok(VerificationReport::failure(request.describe(), "1 interaction failed"))
                }
            });

        let result = run(&integrated_config(), &verifier).await;
        match result {
            Err(AppError::Verification(msg)) => assert!(msg.contains("[latest,sit4]")),
            other => panic!("expected verification failure, got {:?}", other),
        }
    }
}
