//! Contact visibility rules for application listings.
//!
//! Developers see the founder's contact card only once accepted. Founders
//! always see an applicant's GitHub and LinkedIn links but their email and
//! WhatsApp number only once accepted. Contact details always come from the
//! live profile; the submission snapshot is shown to its developer alone.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Application, ApplicationId, ApplicationStatus, Idea, IdeaId, User, UserId};

/// Founder contact card revealed to an accepted developer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCard {
    pub name: String,
    pub email: String,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub whatsapp_number: Option<String>,
}

impl From<&User> for ContactCard {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.to_string(),
            email: user.email.to_string(),
            github_profile: user.github_profile.clone(),
            linkedin_profile: user.linkedin_profile.clone(),
            whatsapp_number: user.whatsapp_number.clone(),
        }
    }
}

/// A developer's own application joined with its idea and, once accepted,
/// the founder's contact card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperApplicationView {
    pub application: Application,
    pub idea: Option<Idea>,
    pub founder: Option<ContactCard>,
}

impl DeveloperApplicationView {
    /// Join an application with its idea and the idea's founder.
    ///
    /// The founder card is dropped unless the application is accepted.
    #[must_use]
    pub fn new(application: Application, idea: Option<Idea>, founder: Option<&User>) -> Self {
        let founder = founder
            .filter(|_| application.status.is_accepted())
            .map(ContactCard::from);
        Self {
            application,
            idea,
            founder,
        }
    }
}

/// Application fields a founder may see. The submission snapshot is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub id: ApplicationId,
    pub idea_id: IdeaId,
    pub developer_id: UserId,
    pub proposal: String,
    pub equity_request: String,
    pub salary_request: String,
    #[serde(flatten)]
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Application> for ApplicationSummary {
    fn from(application: Application) -> Self {
        let Application {
            id,
            idea_id,
            developer_id,
            proposal,
            equity_request,
            salary_request,
            status,
            created_at,
            developer_profile_snapshot: _,
        } = application;
        Self {
            id,
            idea_id,
            developer_id,
            proposal,
            equity_request,
            salary_request,
            status,
            created_at,
        }
    }
}

/// Applicant details shown to the founder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantCard {
    pub name: String,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub email: Option<String>,
    pub whatsapp_number: Option<String>,
}

impl ApplicantCard {
    /// Project the live profile for the given status.
    #[must_use]
    pub fn for_status(user: &User, status: &ApplicationStatus) -> Self {
        let accepted = status.is_accepted();
        Self {
            name: user.name.to_string(),
            github_profile: user.github_profile.clone(),
            linkedin_profile: user.linkedin_profile.clone(),
            email: accepted.then(|| user.email.to_string()),
            whatsapp_number: user.whatsapp_number.clone().filter(|_| accepted),
        }
    }
}

/// An application to one of the founder's ideas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderApplicationView {
    pub application: ApplicationSummary,
    pub idea: Idea,
    pub applicant: Option<ApplicantCard>,
}

impl FounderApplicationView {
    /// Join an application with its idea and the applicant's live profile.
    #[must_use]
    pub fn new(application: Application, idea: Idea, applicant: Option<&User>) -> Self {
        let applicant = applicant.map(|user| ApplicantCard::for_status(user, &application.status));
        Self {
            application: ApplicationSummary::from(application),
            idea,
            applicant,
        }
    }
}
