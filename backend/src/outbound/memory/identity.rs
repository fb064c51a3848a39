//! In-memory identity provider holding Argon2id password hashes.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{IdentityError, IdentityProvider};
use crate::domain::{Credentials, EmailAddress, UserId};
use crate::outbound::password::{hash_password, verify_password};

#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    password_hash: String,
}

/// Credential store keyed by normalised email.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    accounts: RwLock<HashMap<EmailAddress, Account>>,
}

impl InMemoryIdentityProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn register(&self, credentials: &Credentials) -> Result<UserId, IdentityError> {
        let password_hash = hash_password(credentials.password()).await?;
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(credentials.email()) {
            return Err(IdentityError::email_taken(credentials.email().to_string()));
        }
        let user_id = UserId::random();
        accounts.insert(
            credentials.email().clone(),
            Account {
                user_id,
                password_hash,
            },
        );
        Ok(user_id)
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<UserId, IdentityError> {
        let account = self
            .accounts
            .read()
            .await
            .get(credentials.email())
            .cloned()
            .ok_or_else(IdentityError::invalid_credentials)?;
        if verify_password(credentials.password(), &account.password_hash).await? {
            Ok(account.user_id)
        } else {
            Err(IdentityError::invalid_credentials())
        }
    }

    async fn unregister(&self, user_id: &UserId) -> Result<bool, IdentityError> {
        let mut accounts = self.accounts.write().await;
        let before = accounts.len();
        accounts.retain(|_, account| account.user_id != *user_id);
        Ok(accounts.len() < before)
    }
}
