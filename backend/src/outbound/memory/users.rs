//! In-memory user profile store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

/// User store backed by a hash map.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(UserPersistenceError::duplicate(user.id.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, Role, UserName};

    fn user() -> User {
        User::new(
            UserId::random(),
            EmailAddress::new("dev@example.com").expect("email"),
            Role::Developer,
            UserName::new("Dev").expect("name"),
        )
    }

    #[tokio::test]
    async fn insert_refuses_existing_id() {
        let repo = InMemoryUserRepository::new();
        let user = user();
        repo.insert(&user).await.expect("first insert");

        let err = repo.insert(&user).await.expect_err("duplicate");

        assert!(matches!(err, UserPersistenceError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn update_reports_missing_user() {
        let repo = InMemoryUserRepository::new();
        assert!(!repo.update(&user()).await.expect("update"));
    }
}
