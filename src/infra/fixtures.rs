//! Provider-state fixture datasets and the swappable store serving them.
//!
//! The login endpoint always reads through `FixtureStore`; the setup hook
//! swaps the dataset behind it between interactions.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repositories::{InMemoryUserRepository, UserRepository};
use crate::domain::{FixtureKind, User, UserType};
use crate::errors::AppResult;

const JMARIE_NAME: &str = "Jean-Marie de La Beaujardière😀😍";
const JMARIE_USERNAME: &str = "jmarie";

/// jmarie exists with a valid admin account
pub fn user_exists() -> InMemoryUserRepository {
    InMemoryUserRepository::new().with_user(User::new(
        JMARIE_NAME,
        JMARIE_USERNAME,
        "issilly",
        UserType::Admin,
    ))
}

/// jmarie exists but is blocked and has a different password
pub fn user_unauthorized() -> InMemoryUserRepository {
    InMemoryUserRepository::new().with_user(User::new(
        JMARIE_NAME,
        JMARIE_USERNAME,
        "issilly1",
        UserType::Blocked,
    ))
}

/// No users at all
pub fn user_does_not_exist() -> InMemoryUserRepository {
    InMemoryUserRepository::new()
}

/// Build the dataset for a fixture kind
pub fn dataset(kind: FixtureKind) -> InMemoryUserRepository {
    match kind {
        FixtureKind::UserExists => user_exists(),
        FixtureKind::UserUnauthorized => user_unauthorized(),
        FixtureKind::UserDoesNotExist => user_does_not_exist(),
    }
}

struct ActiveFixture {
    kind: FixtureKind,
    users: Arc<InMemoryUserRepository>,
}

/// Holder of the currently selected fixture dataset.
pub struct FixtureStore {
    active: RwLock<ActiveFixture>,
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new(FixtureKind::default())
    }
}

impl FixtureStore {
    pub fn new(kind: FixtureKind) -> Self {
        Self {
            active: RwLock::new(ActiveFixture {
                kind,
                users: Arc::new(dataset(kind)),
            }),
        }
    }

    /// Swap in the dataset for `kind`. Readers holding the previous
    /// dataset keep it until they drop their handle.
    pub async fn select(&self, kind: FixtureKind) {
        let mut active = self.active.write().await;
        active.kind = kind;
        active.users = Arc::new(dataset(kind));
        tracing::debug!(fixture = ?kind, users = active.users.len(), "Fixture selected");
    }

    /// Which fixture is currently selected
    pub async fn active(&self) -> FixtureKind {
        self.active.read().await.kind
    }

    /// Handle to the currently selected dataset
    pub async fn current(&self) -> Arc<InMemoryUserRepository> {
        self.active.read().await.users.clone()
    }
}

#[async_trait]
impl UserRepository for FixtureStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.current().await.find_by_username(username).await
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        self.current().await.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_differ_by_authorization() {
        let exists = user_exists();
        let jmarie = exists.get("jmarie").unwrap();
        assert!(jmarie.is_authorized());
        assert!(jmarie.credentials_match("jmarie", "issilly"));

        let blocked = user_unauthorized();
        let jmarie = blocked.get("jmarie").unwrap();
        assert!(!jmarie.is_authorized());
        assert!(!jmarie.credentials_match("jmarie", "issilly"));

        assert!(user_does_not_exist().is_empty());
    }

    #[tokio::test]
    async fn store_defaults_to_empty_dataset() {
        let store = FixtureStore::default();
        assert_eq!(store.active().await, FixtureKind::UserDoesNotExist);
        assert!(store.find_by_username("jmarie").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn select_swaps_dataset() {
        let store = FixtureStore::default();

        store.select(FixtureKind::UserExists).await;
        let user = store.find_by_username("jmarie").await.unwrap().unwrap();
        assert_eq!(user.user_type, UserType::Admin);

        store.select(FixtureKind::UserUnauthorized).await;
        let user = store.find_by_username("jmarie").await.unwrap().unwrap();
        assert_eq!(user.user_type, UserType::Blocked);
        assert_eq!(store.active().await, FixtureKind::UserUnauthorized);
    }

    #[tokio::test]
    async fn held_handles_survive_a_swap() {
        let store = FixtureStore::new(FixtureKind::UserExists);
        let before = store.current().await;

        store.select(FixtureKind::UserDoesNotExist).await;

        assert_eq!(before.len(), 1);
        assert!(store.current().await.is_empty());
    }
}
