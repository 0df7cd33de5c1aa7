//! Login service - Checks credentials against the selected fixture.
//!
//! Lookup goes through `UserRepository`, so the answer always reflects
//! whichever provider state was applied last.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// Login service trait for dependency injection.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Authenticate a user.
    ///
    /// Fails with `NotFound` when the username is unknown and with
    /// `Unauthorized` when the credentials do not match or the account
    /// is blocked.
    async fn login(&self, username: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of LoginService over any user repository.
pub struct Authenticator<R: UserRepository + ?Sized> {
    users: Arc<R>,
}

impl<R: UserRepository + ?Sized> Authenticator<R> {
    /// Create new login service reading from `users`
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R: UserRepository + ?Sized> LoginService for Authenticator<R> {
    async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_not_found()?;

        if !user.credentials_match(username, password) || !user.is_authorized() {
            tracing::debug!(username, user_type = %user.user_type, "Login rejected");
            return Err(AppError::Unauthorized);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixtureKind, UserType};
    use crate::infra::{FixtureStore, MockUserRepository};
    use mockall::predicate::eq;

    fn authenticator(repo: MockUserRepository) -> Authenticator<MockUserRepository> {
        Authenticator::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .with(eq("ghost"))
            .returning(|_| Ok(None));

        let result = authenticator(repo).login("ghost", "pw").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(User::new("A", "alice", "right", UserType::User))));

        let result = authenticator(repo).login("alice", "wrong").await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn blocked_user_is_unauthorized_even_with_matching_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(User::new("A", "alice", "pw", UserType::Blocked))));

        let result = authenticator(repo).login("alice", "pw").await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn repository_errors_propagate() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Err(AppError::internal("store offline")));

        let result = authenticator(repo).login("alice", "pw").await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn login_follows_selected_fixture() {
        let store = Arc::new(FixtureStore::default());
        let service = Authenticator::new(store.clone());

        for kind in FixtureKind::all() {
            store.select(kind).await;
            let result = service.login("jmarie", "issilly").await;
            match kind {
                FixtureKind::UserExists => assert_eq!(result.unwrap().username, "jmarie"),
                FixtureKind::UserUnauthorized => {
                    assert!(matches!(result, Err(AppError::Unauthorized)))
                }
                FixtureKind::UserDoesNotExist => {
                    assert!(matches!(result, Err(AppError::NotFound)))
                }
            }
        }
    }
}
