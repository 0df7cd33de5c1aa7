//! Provider state setup hook.

use axum::{extract::State, routing::post, Router};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::config::SETUP_PATH;
use crate::domain::ProviderState;
use crate::types::{Empty, ProviderResult};

/// Create the setup route
pub fn setup_routes() -> Router<AppState> {
    Router::new().route(SETUP_PATH, post(setup))
}

/// Switch the provider into the requested state
#[utoipa::path(
    post,
    path = "/setup",
    tag = "Provider States",
    request_body = ProviderState,
    responses(
        (status = 200, description = "State applied"),
        (status = 503, description = "Request body could not be parsed")
    )
)]
pub async fn setup(
    State(state): State<AppState>,
    JsonBody(provider_state): JsonBody<Option<ProviderState>>,
) -> ProviderResult<Empty> {
    // A `null` body carries no state name
    let provider_state = provider_state.unwrap_or_default();
    state.services.states().apply(&provider_state).await?;
    Ok(Empty)
}
