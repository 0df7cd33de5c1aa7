//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{TYPE_ADMIN, TYPE_BLOCKED, TYPE_GUEST, TYPE_USER};

/// Account type tag carried by every user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    User,
    Guest,
    Blocked,
}

impl UserType {
    /// Blocked accounts are never allowed to log in
    pub fn is_authorized(&self) -> bool {
        !matches!(self, UserType::Blocked)
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            UserType::Admin => TYPE_ADMIN,
            UserType::User => TYPE_USER,
            UserType::Guest => TYPE_GUEST,
            UserType::Blocked => TYPE_BLOCKED,
        };
        write!(f, "{}", tag)
    }
}

/// User record as held by a fixture repository.
///
/// The password is only ever read from fixtures or requests; it is never
/// written back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Display name
    #[schema(example = "Jean-Marie de La Beaujardière😀😍")]
    pub name: String,
    /// Login name, unique within a repository
    #[schema(example = "jmarie")]
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(rename = "type")]
    #[schema(example = "admin")]
    pub user_type: UserType,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        user_type: UserType,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
            user_type,
        }
    }

    /// Check whether the supplied credentials match this record
    pub fn credentials_match(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Check whether this account may log in
    pub fn is_authorized(&self) -> bool {
        self.user_type.is_authorized()
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "jmarie")]
    pub username: String,
    #[schema(example = "issilly")]
    pub password: String,
}

/// Login response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: User,
}

impl From<User> for LoginResponse {
    fn from(user: User) -> Self {
        Self { user }
    }
}
