//! Provider states - named fixture configurations requested by the verifier.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::config::{STATE_USER_DOES_NOT_EXIST, STATE_USER_EXISTS, STATE_USER_UNAUTHORIZED};

/// Phase of a state change request. Anything but `teardown` is a setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StateAction {
    Teardown,
    #[default]
    #[serde(other)]
    Setup,
}

/// Body POSTed to the setup hook before an interaction is replayed.
///
/// Every field is optional and `null` counts as absent: a well-formed JSON
/// object with no state name selects the empty fixture. Unknown fields are
/// ignored and the capitalised key spellings are accepted too.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProviderState {
    #[serde(default, alias = "State", deserialize_with = "null_as_default")]
    #[schema(example = "User jmarie exists")]
    pub state: String,
    /// Older verifiers send every state of the interaction here
    #[serde(
        default,
        alias = "States",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub states: Vec<String>,
    /// Passed through to the log, any JSON shape
    #[serde(default, alias = "Params", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub params: Option<Value>,
    #[serde(default, alias = "Action", deserialize_with = "null_as_default")]
    pub action: StateAction,
    #[serde(default, alias = "Consumer", skip_serializing_if = "Option::is_none")]
    pub consumer: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProviderState {
    pub fn setup(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            ..Self::default()
        }
    }

    /// The state name to act on, falling back to the first of `states`
    pub fn name(&self) -> &str {
        if self.state.is_empty() {
            self.states.first().map(String::as_str).unwrap_or("")
        } else {
            &self.state
        }
    }

    pub fn is_teardown(&self) -> bool {
        self.action == StateAction::Teardown
    }
}

/// The fixture datasets a provider state can select
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKind {
    /// jmarie exists and may log in
    UserExists,
    /// jmarie exists but is blocked
    UserUnauthorized,
    /// empty repository
    #[default]
    UserDoesNotExist,
}

impl FixtureKind {
    /// Map a provider state name to a fixture. Unknown names select the
    /// empty repository.
    pub fn from_state(name: &str) -> Self {
        match name {
            STATE_USER_EXISTS => FixtureKind::UserExists,
            STATE_USER_UNAUTHORIZED => FixtureKind::UserUnauthorized,
            _ => FixtureKind::UserDoesNotExist,
        }
    }

    /// Canonical state name for this fixture
    pub fn state_name(&self) -> &'static str {
        match self {
            FixtureKind::UserExists => STATE_USER_EXISTS,
            FixtureKind::UserUnauthorized => STATE_USER_UNAUTHORIZED,
            FixtureKind::UserDoesNotExist => STATE_USER_DOES_NOT_EXIST,
        }
    }

    pub fn all() -> [FixtureKind; 3] {
        [
            FixtureKind::UserExists,
            FixtureKind::UserUnauthorized,
            FixtureKind::UserDoesNotExist,
        ]
    }
}
