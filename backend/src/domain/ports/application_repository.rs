//! Port abstraction for application persistence adapters and their errors.
//!
//! Two writes are conditional so concurrent callers cannot break the
//! lifecycle invariants: [`ApplicationRepository::insert_unique`] refuses a
//! second application for the same idea and developer, and
//! [`ApplicationRepository::transition`] only writes while the stored status
//! is still pending.
use async_trait::async_trait;

use crate::domain::{Application, ApplicationId, ApplicationStatus, IdeaId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by application repository adapters.
    pub enum ApplicationPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "application repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "application repository query failed: {message}",
        /// The developer already applied to the idea.
        Duplicate { idea_id: String, developer_id: String } =>
            "developer {developer_id} already applied to idea {idea_id}",
        /// A stored row could not be mapped back into a domain application.
        Malformed { message: String } => "stored application record is malformed: {message}",
    }
}

/// Result of a compare-and-set status write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The application was pending and now holds the new status.
    Applied(Application),
    /// Another writer decided first; carries the current record.
    Stale(Application),
    /// The application no longer exists.
    Missing,
}

/// Driven port over the applications collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Insert unless an application for the same idea and developer exists,
    /// in which case [`ApplicationPersistenceError::Duplicate`] is returned.
    async fn insert_unique(&self, application: &Application)
    -> Result<(), ApplicationPersistenceError>;

    /// Fetch one application.
    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, ApplicationPersistenceError>;

    /// Existing application for the idea and developer, if any.
    async fn find_by_idea_and_developer(
        &self,
        idea_id: &IdeaId,
        developer_id: &UserId,
    ) -> Result<Option<Application>, ApplicationPersistenceError>;

    /// Applications submitted by `developer_id`, newest first.
    async fn list_by_developer(
        &self,
        developer_id: &UserId,
    ) -> Result<Vec<Application>, ApplicationPersistenceError>;

    /// Applications to `idea_id`, newest first.
    async fn list_by_idea(
        &self,
        idea_id: &IdeaId,
    ) -> Result<Vec<Application>, ApplicationPersistenceError>;

    /// Write `next` only while the stored status is pending.
    async fn transition(
        &self,
        id: &ApplicationId,
        next: &ApplicationStatus,
    ) -> Result<TransitionOutcome, ApplicationPersistenceError>;

    /// Remove an application; `false` when it did not exist.
    async fn delete(&self, id: &ApplicationId) -> Result<bool, ApplicationPersistenceError>;
}
