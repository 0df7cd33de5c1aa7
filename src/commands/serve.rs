//! Serve command - Starts the instrumented provider.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::domain::FixtureKind;
use crate::errors::{AppError, AppResult};
use crate::infra::FixtureStore;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let initial = args
        .state
        .as_deref()
        .map(FixtureKind::from_state)
        .unwrap_or_default();
    tracing::info!(fixture = ?initial, "Starting provider...");

    let fixtures = Arc::new(FixtureStore::new(initial));
    let app = create_router(AppState::from_fixtures(fixtures));

    let addr = bind_addr(&args, config);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Provider running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Listen address: CLI flags win over the configured host and port
fn bind_addr(args: &ServeArgs, mut config: Config) -> String {
    if let Some(host) = &args.host {
        config.server_host = host.clone();
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    config.server_addr()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(host: Option<&str>, port: Option<u16>) -> ServeArgs {
        ServeArgs {
            host: host.map(str::to_string),
            port,
            state: None,
        }
    }

    fn config() -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 9090,
            ..Config::default()
        }
    }

    #[test]
    fn configured_address_is_the_default() {
        assert_eq!(bind_addr(&args(None, None), config()), "127.0.0.1:9090");
        assert_eq!(bind_addr(&args(None, None), Config::default()), "0.0.0.0:8000");
    }

    #[test]
    fn flags_override_configured_address() {
        assert_eq!(bind_addr(&args(Some("localhost"), None), config()), "localhost:9090");
        assert_eq!(bind_addr(&args(None, Some(7000)), config()), "127.0.0.1:7000");
    }
}
