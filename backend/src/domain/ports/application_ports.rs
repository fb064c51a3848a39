//! Driving ports for the application lifecycle.
//!
//! Listings return visibility-filtered views; adapters never see contact
//! fields the caller is not entitled to.

use async_trait::async_trait;

use crate::domain::{
    Application, ApplicationDraft, ApplicationId, Caller, DecisionKind, DeveloperApplicationView,
    Error, FounderApplicationView, IdeaId, UserId,
};

/// Lifecycle mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationCommand: Send + Sync {
    /// Submit a pending application to `idea_id`.
    ///
    /// # Errors
    ///
    /// `not_found` for a missing idea, `forbidden` for non-developers,
    /// `incomplete_profile` when profile links are missing, and
    /// `duplicate_application` when the caller already applied.
    async fn submit_application(
        &self,
        caller: &Caller,
        idea_id: &IdeaId,
        draft: ApplicationDraft,
    ) -> Result<Application, Error>;

    /// Accept or reject a pending application to one of the caller's ideas.
    ///
    /// # Errors
    ///
    /// Checked in order: `not_found`, `forbidden`, `missing_reason`,
    /// `invalid_transition`.
    async fn decide(
        &self,
        caller: &Caller,
        application_id: &ApplicationId,
        kind: DecisionKind,
        reason: Option<String>,
    ) -> Result<Application, Error>;

    /// Withdraw the caller's own application, whatever its status.
    async fn delete_application(
        &self,
        caller: &Caller,
        application_id: &ApplicationId,
    ) -> Result<(), Error>;
}

/// Lifecycle listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationQuery: Send + Sync {
    /// The developer's applications with their ideas and, once accepted, the
    /// founder's contact card.
    async fn list_applications_for_developer(
        &self,
        developer_id: &UserId,
    ) -> Result<Vec<DeveloperApplicationView>, Error>;

    /// Applications to every idea the founder owns, with applicant details.
    async fn list_applications_for_founder_ideas(
        &self,
        founder_id: &UserId,
    ) -> Result<Vec<FounderApplicationView>, Error>;
}
