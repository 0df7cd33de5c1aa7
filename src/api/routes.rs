//! Application route configuration.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use utoipa::OpenApi;

use super::handlers::{login_routes, setup_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{CORRELATION_ID_HEADER, CORRELATION_ID_VALUE, JSON_CONTENT_TYPE};
use crate::domain::FixtureKind;
use crate::errors::AppResult;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        // Login carries a fixed correlation id on every response
        .merge(login_routes().layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(CORRELATION_ID_HEADER),
            HeaderValue::from_static(CORRELATION_ID_VALUE),
        )))
        .merge(setup_routes())
        // Global middleware
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    fixture: FixtureKind,
    users: Vec<String>,
}

/// Health check endpoint reporting the active fixture and its usernames
async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let states = state.services.states();
    let users = states
        .users()
        .await?
        .into_iter()
        .map(|user| user.username)
        .collect();

    Ok(Json(HealthResponse {
        status: "healthy",
        fixture: states.active().await,
        users,
    }))
}

/// Generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
