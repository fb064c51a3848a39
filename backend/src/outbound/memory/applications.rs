//! In-memory application store with atomic conditional writes.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ApplicationPersistenceError, ApplicationRepository, TransitionOutcome};
use crate::domain::{Application, ApplicationId, ApplicationStatus, IdeaId, UserId};

/// Application store keeping records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    applications: RwLock<Vec<Application>>,
}

impl InMemoryApplicationRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn select<P>(&self, predicate: P) -> Vec<Application>
    where
        P: Fn(&Application) -> bool + Send,
    {
        let mut selected: Vec<Application> = self
            .applications
            .read()
            .await
            .iter()
            .filter(|application| predicate(application))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        selected
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn insert_unique(
        &self,
        application: &Application,
    ) -> Result<(), ApplicationPersistenceError> {
        let mut applications = self.applications.write().await;
        let taken = applications.iter().any(|existing| {
            existing.idea_id == application.idea_id
                && existing.developer_id == application.developer_id
        });
        if taken {
            return Err(ApplicationPersistenceError::duplicate(
                application.idea_id.to_string(),
                application.developer_id.to_string(),
            ));
        }
        applications.push(application.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, ApplicationPersistenceError> {
        Ok(self
            .applications
            .read()
            .await
            .iter()
            .find(|application| &application.id == id)
            .cloned())
    }

    async fn find_by_idea_and_developer(
        &self,
        idea_id: &IdeaId,
        developer_id: &UserId,
    ) -> Result<Option<Application>, ApplicationPersistenceError> {
        Ok(self
            .applications
            .read()
            .await
            .iter()
            .find(|application| {
                &application.idea_id == idea_id && &application.developer_id == developer_id
            })
            .cloned())
    }

    async fn list_by_developer(
        &self,
        developer_id: &UserId,
    ) -> Result<Vec<Application>, ApplicationPersistenceError> {
        let developer_id = *developer_id;
        Ok(self
            .select(move |application| application.developer_id == developer_id)
            .await)
    }

    async fn list_by_idea(
        &self,
        idea_id: &IdeaId,
    ) -> Result<Vec<Application>, ApplicationPersistenceError> {
        let idea_id = *idea_id;
        Ok(self
            .select(move |application| application.idea_id == idea_id)
            .await)
    }

    async fn transition(
        &self,
        id: &ApplicationId,
        next: &ApplicationStatus,
    ) -> Result<TransitionOutcome, ApplicationPersistenceError> {
        let mut applications = self.applications.write().await;
        let Some(stored) = applications
            .iter_mut()
            .find(|application| &application.id == id)
        else {
            return Ok(TransitionOutcome::Missing);
        };
        if !stored.status.is_pending() {
            return Ok(TransitionOutcome::Stale(stored.clone()));
        }
        stored.status = next.clone();
        Ok(TransitionOutcome::Applied(stored.clone()))
    }

    async fn delete(&self, id: &ApplicationId) -> Result<bool, ApplicationPersistenceError> {
        let mut applications = self.applications.write().await;
        let before = applications.len();
        applications.retain(|application| &application.id != id);
        Ok(applications.len() != before)
    }
}
