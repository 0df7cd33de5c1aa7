//! Login handler.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{LoginRequest, LoginResponse};
use crate::types::ProviderResult;

/// Create login routes.
///
/// Everything under the `/users/login/` prefix answers, whatever follows it.
pub fn login_routes() -> Router<AppState> {
    Router::new()
        .route("/users/login/", post(login))
        .route("/users/login/*rest", post(login))
}

/// Log a user in against the currently selected fixture
#[utoipa::path(
    post,
    path = "/users/login/{id}",
    tag = "Login",
    params(
        ("id" = String, Path, description = "User id (not used for lookup)")
    ),
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Wrong credentials or blocked account"),
        (status = 404, description = "User does not exist"),
        (status = 503, description = "Request body could not be parsed")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> ProviderResult<Json<LoginResponse>> {
    let user = state
        .services
        .login()
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse::from(user)))
}
