//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{login_handler, setup_handler};
use crate::domain::{
    FixtureKind, LoginRequest, LoginResponse, ProviderState, StateAction, User, UserType,
};

/// OpenAPI documentation for the login provider
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Login Provider",
        version = "0.1.0",
        description = "Login API instrumented with provider-state hooks for contract verification",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        login_handler::login,
        setup_handler::setup,
    ),
    components(
        schemas(
            User,
            UserType,
            LoginRequest,
            LoginResponse,
            ProviderState,
            StateAction,
            FixtureKind,
        )
    ),
    tags(
        (name = "Login", description = "User login"),
        (name = "Provider States", description = "Fixture selection for contract verification")
    )
)]
pub struct ApiDoc;
