//! Verification request - what to verify and where the provider lives.

use url::Url;

use crate::errors::{AppError, AppResult};

/// One verification run against a running provider.
#[derive(Clone, Default)]
pub struct VerifyRequest {
    /// Base URL of the running provider, e.g. `http://127.0.0.1:8000`
    pub provider_base_url: String,
    /// Local pact files or remote pact URLs
    pub pact_urls: Vec<String>,
    /// Broker to fetch pacts for every known consumer from
    pub broker_url: Option<String>,
    /// Endpoint POSTed to before each interaction
    pub provider_states_setup_url: Option<String>,
    pub broker_username: Option<String>,
    broker_password: Option<String>,
    /// Consumer version tags to select from the broker
    pub tags: Vec<String>,
    pub publish_verification_results: bool,
    pub provider_version: Option<String>,
    pub provider_name: Option<String>,
}

impl std::fmt::Debug for VerifyRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyRequest")
            .field("provider_base_url", &self.provider_base_url)
            .field("pact_urls", &self.pact_urls)
            .field("broker_url", &self.broker_url)
            .field("provider_states_setup_url", &self.provider_states_setup_url)
            .field("broker_username", &self.broker_username)
            .field(
                "broker_password",
                &self.broker_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("tags", &self.tags)
            .field(
                "publish_verification_results",
                &self.publish_verification_results,
            )
            .field("provider_version", &self.provider_version)
            .field("provider_name", &self.provider_name)
            .finish()
    }
}

impl VerifyRequest {
    pub fn new(provider_base_url: impl Into<String>) -> Self {
        Self {
            provider_base_url: provider_base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_pact_url(mut self, url: impl Into<String>) -> Self {
        self.pact_urls.push(url.into());
        self
    }

    pub fn with_broker(mut self, url: impl Into<String>) -> Self {
        self.broker_url = Some(url.into());
        self
    }

    pub fn with_setup_url(mut self, url: impl Into<String>) -> Self {
        self.provider_states_setup_url = Some(url.into());
        self
    }

    pub fn with_credentials(mut self, username: Option<String>, password: Option<String>) -> Self {
        self.broker_username = username;
        self.broker_password = password;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Publish results back to the broker under `version`
    pub fn publishing(mut self, version: impl Into<String>) -> Self {
        self.publish_verification_results = true;
        self.provider_version = Some(version.into());
        self
    }

    pub fn for_provider(mut self, name: impl Into<String>) -> Self {
        self.provider_name = Some(name.into());
        self
    }

    pub fn broker_password(&self) -> Option<&str> {
        self.broker_password.as_deref()
    }

    /// Short human-readable label used in logs and failure reports
    pub fn describe(&self) -> String {
        let mut sources: Vec<String> = self.pact_urls.clone();
        if let Some(broker) = &self.broker_url {
            if self.tags.is_empty() {
                sources.push(format!("broker {}", broker));
            } else {
                sources.push(format!("broker {} [{}]", broker, self.tags.join(",")));
            }
        }
        sources.join(" + ")
    }

    /// Check the request is complete and self-consistent.
    pub fn validate(&self) -> AppResult<()> {
        self.base_url()?;

        if self.pact_urls.is_empty() && self.broker_url.is_none() {
            return Err(AppError::invalid_request(
                "at least one pact URL or a broker URL is required",
            ));
        }

        if self.broker_username.is_some() != self.broker_password.is_some() {
            return Err(AppError::invalid_request(
                "broker username and password must be given together",
            ));
        }

        if self.publish_verification_results && self.provider_version.is_none() {
            return Err(AppError::invalid_request(
                "a provider version is required to publish verification results",
            ));
        }

        if !self.tags.is_empty() && self.broker_url.is_none() {
            return Err(AppError::invalid_request(
                "consumer version tags require a broker URL",
            ));
        }

        Ok(())
    }

    /// Parsed provider base URL
    pub fn base_url(&self) -> AppResult<Url> {
        if self.provider_base_url.is_empty() {
            return Err(AppError::invalid_request("provider base URL is required"));
        }

        let url = Url::parse(&self.provider_base_url).map_err(|e| {
            AppError::invalid_request(format!(
                "invalid provider base URL {}: {}",
                self.provider_base_url, e
            ))
        })?;

        if url.host_str().is_none() {
            return Err(AppError::invalid_request(format!(
                "provider base URL {} has no host",
                self.provider_base_url
            )));
        }

        Ok(url)
    }
}

/// Whether a pact location should be fetched rather than read from disk
pub(crate) fn is_remote(location: &str) -> bool {
    Url::parse(location).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
