//! Port abstraction for the identity provider that owns credentials.
//!
//! The provider issues the stable [`UserId`] that keys the profile record.
//! Session handling stays in the inbound adapter.
use async_trait::async_trait;

use crate::domain::{Credentials, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity provider adapters.
    pub enum IdentityError {
        /// The email already has an account.
        EmailTaken { email: String } => "an account already exists for {email}",
        /// Unknown email or wrong password.
        InvalidCredentials => "invalid credentials",
        /// Provider connection could not be established.
        Connection { message: String } => "identity provider connection failed: {message}",
        /// Provider query or hashing failed.
        Query { message: String } => "identity provider request failed: {message}",
    }
}

/// Driven port for credential registration and verification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register credentials and return the new user's id.
    async fn register(&self, credentials: &Credentials) -> Result<UserId, IdentityError>;

    /// Verify credentials and return the matching user's id.
    async fn authenticate(&self, credentials: &Credentials) -> Result<UserId, IdentityError>;

    /// Remove the credentials issued for `user_id`.
    ///
    /// Returns `false` when no credentials were held for that id.
    async fn unregister(&self, user_id: &UserId) -> Result<bool, IdentityError>;
}
