//! In-memory idea store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{IdeaPersistenceError, IdeaRepository};
use crate::domain::{Idea, IdeaId, UserId};

/// Idea store keeping postings in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryIdeaRepository {
    ideas: RwLock<Vec<Idea>>,
}

impl InMemoryIdeaRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(mut ideas: Vec<Idea>) -> Vec<Idea> {
    // Stable sort: ties keep insertion order.
    ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ideas
}

#[async_trait]
impl IdeaRepository for InMemoryIdeaRepository {
    async fn insert(&self, idea: &Idea) -> Result<(), IdeaPersistenceError> {
        self.ideas.write().await.push(idea.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &IdeaId) -> Result<Option<Idea>, IdeaPersistenceError> {
        Ok(self
            .ideas
            .read()
            .await
            .iter()
            .find(|idea| &idea.id == id)
            .cloned())
    }

    async fn update(&self, idea: &Idea) -> Result<bool, IdeaPersistenceError> {
        let mut ideas = self.ideas.write().await;
        match ideas.iter_mut().find(|stored| stored.id == idea.id) {
            Some(stored) => {
                *stored = idea.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &IdeaId) -> Result<bool, IdeaPersistenceError> {
        let mut ideas = self.ideas.write().await;
        let before = ideas.len();
        ideas.retain(|idea| &idea.id != id);
        Ok(ideas.len() != before)
    }

    async fn list_newest_first(&self) -> Result<Vec<Idea>, IdeaPersistenceError> {
        Ok(newest_first(self.ideas.read().await.clone()))
    }

    async fn list_by_founder(
        &self,
        founder_id: &UserId,
    ) -> Result<Vec<Idea>, IdeaPersistenceError> {
        let owned = self
            .ideas
            .read()
            .await
            .iter()
            .filter(|idea| &idea.founder_id == founder_id)
            .cloned()
            .collect();
        Ok(newest_first(owned))
    }
}
