//! Driving ports for account registration, sign-in, and profile upkeep.
//!
//! Inbound adapters call these to manage accounts without importing the
//! identity provider or persistence adapters.

use async_trait::async_trait;

use crate::domain::{Caller, Credentials, Error, ProfileUpdate, Registration, User, UserId};

/// Account registration and sign-in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Register credentials and store the profile.
    ///
    /// # Errors
    ///
    /// Returns `conflict` when the email is already registered.
    async fn register(&self, registration: Registration) -> Result<Caller, Error>;

    /// Authenticate credentials and resolve the caller's role.
    ///
    /// # Errors
    ///
    /// Returns `unauthorized` for unknown emails or wrong passwords.
    async fn sign_in(&self, credentials: Credentials) -> Result<Caller, Error>;
}

/// Read access to the caller's own profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Fetch the profile for `user_id`.
    async fn fetch_profile(&self, user_id: &UserId) -> Result<User, Error>;
}

/// Owner-only profile updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileCommand: Send + Sync {
    /// Apply `update` to the profile of `user_id` and return the result.
    async fn update_profile(&self, user_id: &UserId, update: ProfileUpdate)
    -> Result<User, Error>;
}
