//! Idea repository services: founder-scoped CRUD over idea postings.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use super::port_error_mapping::map_idea_error;
use super::ports::{IdeaCommand, IdeaQuery, IdeaRepository};
use super::{Caller, Error, Idea, IdeaDraft, IdeaId, Role, UserId};

/// Idea service implementing [`IdeaCommand`] and [`IdeaQuery`].
#[derive(Clone)]
pub struct IdeaService<R> {
    ideas: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> IdeaService<R> {
    /// Create a new service over the idea store.
    pub fn new(ideas: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { ideas, clock }
    }
}

impl<R> IdeaService<R>
where
    R: IdeaRepository,
{
    async fn find(&self, idea_id: &IdeaId) -> Result<Idea, Error> {
        self.ideas
            .find_by_id(idea_id)
            .await
            .map_err(map_idea_error)?
            .ok_or_else(|| Error::not_found(format!("idea {idea_id} not found")))
    }

    async fn find_owned(&self, caller: &Caller, idea_id: &IdeaId) -> Result<Idea, Error> {
        let idea = self.find(idea_id).await?;
        if idea.founder_id != caller.user_id {
            return Err(Error::forbidden("only the founder who posted this idea may change it"));
        }
        Ok(idea)
    }
}

#[async_trait]
impl<R> IdeaCommand for IdeaService<R>
where
    R: IdeaRepository,
{
    async fn create_idea(&self, caller: &Caller, draft: IdeaDraft) -> Result<Idea, Error> {
        caller.require_role(Role::Founder)?;
        let idea = draft.into_idea(IdeaId::random(), caller.user_id, self.clock.utc());
        self.ideas.insert(&idea).await.map_err(map_idea_error)?;
        info!(idea_id = %idea.id, founder_id = %idea.founder_id, "idea posted");
        Ok(idea)
    }

    async fn update_idea(
        &self,
        caller: &Caller,
        idea_id: &IdeaId,
        draft: IdeaDraft,
    ) -> Result<Idea, Error> {
        let current = self.find_owned(caller, idea_id).await?;
        let updated = draft.apply_to(current);
        if !self.ideas.update(&updated).await.map_err(map_idea_error)? {
            return Err(Error::not_found(format!("idea {idea_id} not found")));
        }
        Ok(updated)
    }

    async fn delete_idea(&self, caller: &Caller, idea_id: &IdeaId) -> Result<(), Error> {
        self.find_owned(caller, idea_id).await?;
        if !self.ideas.delete(idea_id).await.map_err(map_idea_error)? {
            return Err(Error::not_found(format!("idea {idea_id} not found")));
        }
        info!(%idea_id, "idea deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> IdeaQuery for IdeaService<R>
where
    R: IdeaRepository,
{
    async fn list_ideas(&self) -> Result<Vec<Idea>, Error> {
        self.ideas.list_newest_first().await.map_err(map_idea_error)
    }

    async fn list_ideas_by_founder(&self, founder_id: &UserId) -> Result<Vec<Idea>, Error> {
        self.ideas
            .list_by_founder(founder_id)
            .await
            .map_err(map_idea_error)
    }

    async fn fetch_idea(&self, idea_id: &IdeaId) -> Result<Idea, Error> {
        self.find(idea_id).await
    }
}
