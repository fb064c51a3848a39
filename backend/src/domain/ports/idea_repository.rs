//! Port abstraction for idea persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Idea, IdeaId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by idea repository adapters.
    pub enum IdeaPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "idea repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "idea repository query failed: {message}",
        /// A stored row could not be mapped back into a domain idea.
        Malformed { message: String } => "stored idea record is malformed: {message}",
    }
}

/// Driven port over the ideas collection.
///
/// Listings are ordered newest first and re-run the store query on every
/// call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// Persist a new idea.
    async fn insert(&self, idea: &Idea) -> Result<(), IdeaPersistenceError>;

    /// Fetch one idea.
    async fn find_by_id(&self, id: &IdeaId) -> Result<Option<Idea>, IdeaPersistenceError>;

    /// Overwrite an existing idea; `false` when it no longer exists.
    async fn update(&self, idea: &Idea) -> Result<bool, IdeaPersistenceError>;

    /// Remove an idea; `false` when it did not exist.
    async fn delete(&self, id: &IdeaId) -> Result<bool, IdeaPersistenceError>;

    /// All ideas ordered by `created_at` descending.
    async fn list_newest_first(&self) -> Result<Vec<Idea>, IdeaPersistenceError>;

    /// Ideas owned by `founder_id`, newest first.
    async fn list_by_founder(&self, founder_id: &UserId)
    -> Result<Vec<Idea>, IdeaPersistenceError>;
}
