//! Port abstraction for user profile persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A profile already exists for this id.
        Duplicate { id: String } => "user {id} already exists",
        /// A stored row could not be mapped back into a domain user.
        Malformed { message: String } => "stored user record is malformed: {message}",
    }
}

/// Driven port over the users collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record keyed by the identity provider's id.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Replace the mutable profile fields; `false` when no such user exists.
    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError>;
}
