//! Driving ports for the idea repository use-cases.

use async_trait::async_trait;

use crate::domain::{Caller, Error, Idea, IdeaDraft, IdeaId, UserId};

/// Founder-side idea mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdeaCommand: Send + Sync {
    /// Post a new idea owned by the calling founder.
    async fn create_idea(&self, caller: &Caller, draft: IdeaDraft) -> Result<Idea, Error>;

    /// Replace the editable fields of an idea the caller owns.
    async fn update_idea(
        &self,
        caller: &Caller,
        idea_id: &IdeaId,
        draft: IdeaDraft,
    ) -> Result<Idea, Error>;

    /// Delete an idea the caller owns. Its applications are left in place.
    async fn delete_idea(&self, caller: &Caller, idea_id: &IdeaId) -> Result<(), Error>;
}

/// Public idea listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdeaQuery: Send + Sync {
    /// Every idea, newest first.
    async fn list_ideas(&self) -> Result<Vec<Idea>, Error>;

    /// Ideas owned by `founder_id`, newest first.
    async fn list_ideas_by_founder(&self, founder_id: &UserId) -> Result<Vec<Idea>, Error>;

    /// One idea by id.
    async fn fetch_idea(&self, idea_id: &IdeaId) -> Result<Idea, Error>;
}
