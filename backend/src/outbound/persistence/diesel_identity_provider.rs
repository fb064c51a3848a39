//! PostgreSQL-backed `IdentityProvider` storing Argon2id password hashes.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{IdentityError, IdentityProvider};
use crate::domain::{Credentials, UserId};
use crate::outbound::password::{hash_password, verify_password};

use super::diesel_error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{CredentialRow, NewCredentialRow};
use super::pool::DbPool;
use super::schema::credentials;

const EMAIL_KEY: &str = "credentials_email_key";

/// Diesel-backed implementation of the [`IdentityProvider`] port.
#[derive(Clone)]
pub struct DieselIdentityProvider {
    pool: DbPool,
}

impl DieselIdentityProvider {
    /// Create a new provider with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> IdentityError {
    map_diesel_error(error, IdentityError::query, IdentityError::connection)
}

#[async_trait]
impl IdentityProvider for DieselIdentityProvider {
    async fn register(&self, credentials: &Credentials) -> Result<UserId, IdentityError> {
        let password_hash = hash_password(credentials.password()).await?;
        let user_id = UserId::random();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdentityError::connection))?;
        let row = NewCredentialRow {
            user_id: *user_id.as_uuid(),
            email: credentials.email().as_ref(),
            password_hash: &password_hash,
        };
        match diesel::insert_into(credentials::table)
            .values(&row)
            .execute(&mut conn)
            .await
        {
            Ok(_) => Ok(user_id),
            Err(err) if is_unique_violation(&err, EMAIL_KEY) => {
                Err(IdentityError::email_taken(credentials.email().to_string()))
            }
            Err(err) => Err(map_error(err)),
        }
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<UserId, IdentityError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdentityError::connection))?;
        let row: Option<CredentialRow> = credentials::table
            .filter(credentials::email.eq(credentials.email().as_ref()))
            .select(CredentialRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;
        let Some(row) = row else {
            debug!("sign-in for unknown email");
            return Err(IdentityError::invalid_credentials());
        };
        if verify_password(credentials.password(), &row.password_hash).await? {
            Ok(UserId::from_uuid(row.user_id))
        } else {
            Err(IdentityError::invalid_credentials())
        }
    }

    async fn unregister(&self, user_id: &UserId) -> Result<bool, IdentityError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdentityError::connection))?;
        let removed = diesel::delete(credentials::table.find(*user_id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(removed > 0)
    }
}
