//! User repository backed by an in-memory map.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::User;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by login name
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// List every user in the repository, ordered by username
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Fixture dataset keyed by username
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user, replacing any existing record with the same username
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.username.clone(), user);
        self
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.get(username).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserType;

    #[tokio::test]
    async fn finds_users_by_username() {
        let repo = InMemoryUserRepository::new()
            .with_user(User::new("Alice", "alice", "pw", UserType::User));

        let found = repo.find_by_username("alice").await.unwrap();
        assert_eq!(found.map(|u| u.name), Some("Alice".to_string()));
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn later_records_replace_earlier_ones() {
        let repo = InMemoryUserRepository::new()
            .with_user(User::new("Old", "alice", "pw", UserType::User))
            .with_user(User::new("New", "alice", "pw", UserType::Admin))
            .with_user(User::new("Bob", "bob", "pw", UserType::Guest));

        assert_eq!(repo.len(), 2);
        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["New", "Bob"]);
    }
}
