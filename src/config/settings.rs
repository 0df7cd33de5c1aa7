//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_CONSUMER, DEFAULT_LOG_DIR, DEFAULT_PACT_DIR, DEFAULT_PROVIDER,
    DEFAULT_PROVIDER_VERSION, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_VERIFIER_BIN,
};

/// Pact broker credentials and location.
#[derive(Clone, Default)]
pub struct BrokerSettings {
    pub url: Option<String>,
    pub username: Option<String>,
    password: Option<String>,
}

impl std::fmt::Debug for BrokerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl BrokerSettings {
    /// Create broker settings with explicit credentials.
    pub fn new(url: Option<String>, username: Option<String>, password: Option<String>) -> Self {
        Self {
            url,
            username,
            password,
        }
    }

    /// Broker password, if configured.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Directory holding local pact files
    pub pact_dir: PathBuf,
    /// Directory the verifier output log is written to
    pub log_dir: PathBuf,
    pub consumer: String,
    pub provider: String,
    pub provider_version: String,
    /// Also verify against published pacts on the broker
    pub integrated_tests: bool,
    pub broker: BrokerSettings,
    /// Path or name of the verification engine executable
    pub verifier_bin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            pact_dir: PathBuf::from(DEFAULT_PACT_DIR),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            consumer: DEFAULT_CONSUMER.to_string(),
            provider: DEFAULT_PROVIDER.to_string(),
            provider_version: DEFAULT_PROVIDER_VERSION.to_string(),
            integrated_tests: false,
            broker: BrokerSettings::default(),
            verifier_bin: DEFAULT_VERIFIER_BIN.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            pact_dir: env::var("PACT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.pact_dir),
            log_dir: env::var("PACT_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            consumer: env::var("PACT_CONSUMER").unwrap_or(defaults.consumer),
            provider: env::var("PACT_PROVIDER").unwrap_or(defaults.provider),
            provider_version: env::var("PACT_PROVIDER_VERSION")
                .unwrap_or(defaults.provider_version),
            // Any non-empty value turns broker verification on
            integrated_tests: env::var("PACT_INTEGRATED_TESTS")
                .map(|v| !v.is_empty())
                .unwrap_or(false),
            broker: BrokerSettings::new(
                non_empty_var("PACT_BROKER_HOST"),
                non_empty_var("PACT_BROKER_USERNAME"),
                non_empty_var("PACT_BROKER_PASSWORD"),
            ),
            verifier_bin: env::var("PACT_VERIFIER_BIN").unwrap_or(defaults.verifier_bin),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Local pact file for the configured consumer/provider pair.
    pub fn local_pact_file(&self) -> PathBuf {
        self.pact_dir
            .join(format!("{}-{}.json", self.consumer, self.provider))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
