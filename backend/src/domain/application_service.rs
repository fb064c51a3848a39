//! Application lifecycle services.
//!
//! Submission runs the profile completeness gate and duplicate checks;
//! decisions are written with a compare-and-set so exactly one founder
//! decision wins. Listings join ideas and profiles and degrade to `None` when
//! either has gone away.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use super::port_error_mapping::{map_application_error, map_idea_error, map_user_error};
use super::ports::{
    ApplicationCommand, ApplicationQuery, ApplicationRepository, IdeaRepository,
    TransitionOutcome, UserRepository,
};
use super::{
    Application, ApplicationDraft, ApplicationId, Caller, Decision, DecisionKind,
    DeveloperApplicationView, Error, FounderApplicationView, Idea, IdeaId, Role, User, UserId,
    ensure_complete_profile,
};

/// Lifecycle service implementing [`ApplicationCommand`] and
/// [`ApplicationQuery`].
#[derive(Clone)]
pub struct ApplicationLifecycleService<A, I, U> {
    applications: Arc<A>,
    ideas: Arc<I>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<A, I, U> ApplicationLifecycleService<A, I, U> {
    /// Create a new service over the three stores.
    pub fn new(
        applications: Arc<A>,
        ideas: Arc<I>,
        users: Arc<U>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            applications,
            ideas,
            users,
            clock,
        }
    }
}

fn invalid_transition(current: &Application) -> Error {
    Error::invalid_transition(format!(
        "application is already {}",
        current.status.as_str()
    ))
}

impl<A, I, U> ApplicationLifecycleService<A, I, U>
where
    A: ApplicationRepository,
    I: IdeaRepository,
    U: UserRepository,
{
    async fn idea(&self, idea_id: &IdeaId) -> Result<Option<Idea>, Error> {
        self.ideas.find_by_id(idea_id).await.map_err(map_idea_error)
    }

    async fn user(&self, user_id: &UserId) -> Result<Option<User>, Error> {
        self.users.find_by_id(user_id).await.map_err(map_user_error)
    }

    async fn application(&self, id: &ApplicationId) -> Result<Application, Error> {
        self.applications
            .find_by_id(id)
            .await
            .map_err(map_application_error)?
            .ok_or_else(|| Error::not_found(format!("application {id} not found")))
    }

    /// Look up `id` once per listing.
    async fn cached_user<'c>(
        &self,
        cache: &'c mut HashMap<UserId, Option<User>>,
        id: UserId,
    ) -> Result<Option<&'c User>, Error> {
        if !cache.contains_key(&id) {
            let user = self.user(&id).await?;
            cache.insert(id, user);
        }
        Ok(cache.get(&id).and_then(Option::as_ref))
    }
}

#[async_trait]
impl<A, I, U> ApplicationCommand for ApplicationLifecycleService<A, I, U>
where
    A: ApplicationRepository,
    I: IdeaRepository,
    U: UserRepository,
{
    async fn submit_application(
        &self,
        caller: &Caller,
        idea_id: &IdeaId,
        draft: ApplicationDraft,
    ) -> Result<Application, Error> {
        let idea = self
            .idea(idea_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("idea {idea_id} not found")))?;
        caller.require_role(Role::Developer)?;
        let developer = self
            .user(&caller.user_id)
            .await?
            .ok_or_else(|| Error::not_found("profile not found"))?;
        ensure_complete_profile(&developer)?;

        let existing = self
            .applications
            .find_by_idea_and_developer(&idea.id, &developer.id)
            .await
            .map_err(map_application_error)?;
        if existing.is_some() {
            return Err(Error::duplicate_application(
                "you have already applied to this idea",
            ));
        }

        let application = draft.into_application(
            ApplicationId::random(),
            idea.id,
            &developer,
            self.clock.utc(),
        );
        self.applications
            .insert_unique(&application)
            .await
            .map_err(map_application_error)?;
        info!(
            application_id = %application.id,
            idea_id = %idea.id,
            developer_id = %developer.id,
            "application submitted"
        );
        Ok(application)
    }

    async fn decide(
        &self,
        caller: &Caller,
        application_id: &ApplicationId,
        kind: DecisionKind,
        reason: Option<String>,
    ) -> Result<Application, Error> {
        let application = self.application(application_id).await?;
        let idea = self.idea(&application.idea_id).await?.ok_or_else(|| {
            Error::not_found(format!("idea {} not found", application.idea_id))
        })?;
        if idea.founder_id != caller.user_id {
            return Err(Error::forbidden(
                "only the founder who posted this idea may decide",
            ));
        }
        let decision = Decision::from_parts(kind, reason.as_deref())
            .map_err(|err| Error::missing_reason(err.to_string()))?;
        let next = application
            .status
            .apply(decision)
            .map_err(|err| Error::invalid_transition(err.to_string()))?;

        match self
            .applications
            .transition(application_id, &next)
            .await
            .map_err(map_application_error)?
        {
            TransitionOutcome::Applied(updated) => {
                info!(%application_id, status = updated.status.as_str(), "application decided");
                Ok(updated)
            }
            TransitionOutcome::Stale(current) => {
                debug!(%application_id, "lost decision race");
                Err(invalid_transition(&current))
            }
            TransitionOutcome::Missing => Err(Error::not_found(format!(
                "application {application_id} not found"
            ))),
        }
    }

    async fn delete_application(
        &self,
        caller: &Caller,
        application_id: &ApplicationId,
    ) -> Result<(), Error> {
        let application = self.application(application_id).await?;
        if application.developer_id != caller.user_id {
            return Err(Error::forbidden(
                "only the applying developer may withdraw this application",
            ));
        }
        if !self
            .applications
            .delete(application_id)
            .await
            .map_err(map_application_error)?
        {
            return Err(Error::not_found(format!(
                "application {application_id} not found"
            )));
        }
        info!(%application_id, "application withdrawn");
        Ok(())
    }
}

#[async_trait]
impl<A, I, U> ApplicationQuery for ApplicationLifecycleService<A, I, U>
where
    A: ApplicationRepository,
    I: IdeaRepository,
    U: UserRepository,
{
    async fn list_applications_for_developer(
        &self,
        developer_id: &UserId,
    ) -> Result<Vec<DeveloperApplicationView>, Error> {
        let applications = self
            .applications
            .list_by_developer(developer_id)
            .await
            .map_err(map_application_error)?;

        let mut founders = HashMap::new();
        let mut views = Vec::with_capacity(applications.len());
        for application in applications {
            let idea = self.idea(&application.idea_id).await?;
            let founder = match (&idea, application.status.is_accepted()) {
                (Some(idea), true) => self.cached_user(&mut founders, idea.founder_id).await?,
                _ => None,
            };
            views.push(DeveloperApplicationView::new(application, idea, founder));
        }
        Ok(views)
    }

    async fn list_applications_for_founder_ideas(
        &self,
        founder_id: &UserId,
    ) -> Result<Vec<FounderApplicationView>, Error> {
        let ideas = self
            .ideas
            .list_by_founder(founder_id)
            .await
            .map_err(map_idea_error)?;

        let mut applicants = HashMap::new();
        let mut views = Vec::new();
        for idea in ideas {
            let applications = self
                .applications
                .list_by_idea(&idea.id)
                .await
                .map_err(map_application_error)?;
            for application in applications {
                let applicant = self
                    .cached_user(&mut applicants, application.developer_id)
                    .await?;
                views.push(FounderApplicationView::new(
                    application,
                    idea.clone(),
                    applicant,
                ));
            }
        }
        Ok(views)
    }
}

#[cfg(test)]
#[path = "application_service_tests.rs"]
mod tests;
