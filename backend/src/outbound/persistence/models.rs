//! Internal Diesel row structs and their mapping to domain types.
//!
//! These types never leave the persistence layer. Reading a row back into a
//! domain entity re-validates it; rows that fail are reported as malformed
//! rather than silently repaired.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Application, ApplicationId, ApplicationStatus, EmailAddress, Idea, IdeaId, ProfileSnapshot,
    Role, Skills, User, UserId, UserName,
};

use super::schema::{applications, credentials, ideas, users};

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = credentials)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CredentialRow {
    pub user_id: Uuid,
    pub password_hash: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = credentials)]
pub(crate) struct NewCredentialRow<'a> {
    pub user_id: Uuid,
    pub email: &'a str,
    pub password_hash: &'a str,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub name: String,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub whatsapp_number: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub role: &'a str,
    pub name: &'a str,
    pub github_profile: Option<&'a str>,
    pub linkedin_profile: Option<&'a str>,
    pub whatsapp_number: Option<&'a str>,
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: *user.id.as_uuid(),
            email: user.email.as_ref(),
            role: user.role.as_str(),
            name: user.name.as_ref(),
            github_profile: user.github_profile.as_deref(),
            linkedin_profile: user.linkedin_profile.as_deref(),
            whatsapp_number: user.whatsapp_number.as_deref(),
        }
    }
}

/// Only the owner-editable columns; `None` writes SQL NULL.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserProfileUpdate<'a> {
    pub name: &'a str,
    pub github_profile: Option<&'a str>,
    pub linkedin_profile: Option<&'a str>,
    pub whatsapp_number: Option<&'a str>,
}

impl<'a> From<&'a User> for UserProfileUpdate<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            name: user.name.as_ref(),
            github_profile: user.github_profile.as_deref(),
            linkedin_profile: user.linkedin_profile.as_deref(),
            whatsapp_number: user.whatsapp_number.as_deref(),
        }
    }
}

impl TryFrom<UserRow> for User {
    type Error = String;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = EmailAddress::new(&row.email).map_err(|err| format!("email: {err}"))?;
        let role: Role = row.role.parse().map_err(|err| format!("role: {err}"))?;
        let name = UserName::new(&row.name).map_err(|err| format!("name: {err}"))?;
        Ok(User::new(UserId::from_uuid(row.id), email, role, name).with_contacts(
            row.github_profile,
            row.linkedin_profile,
            row.whatsapp_number,
        ))
    }
}

// ---------------------------------------------------------------------------
// Ideas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = ideas)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct IdeaRow {
    pub id: Uuid,
    pub founder_id: Uuid,
    pub title: String,
    pub description: String,
    pub equity_range: String,
    pub salary_range: String,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Idea> for IdeaRow {
    fn from(idea: &Idea) -> Self {
        Self {
            id: *idea.id.as_uuid(),
            founder_id: *idea.founder_id.as_uuid(),
            title: idea.title.clone(),
            description: idea.description.clone(),
            equity_range: idea.equity_range.clone(),
            salary_range: idea.salary_range.clone(),
            skills: idea.skills.as_slice().to_vec(),
            created_at: idea.created_at,
        }
    }
}

impl TryFrom<IdeaRow> for Idea {
    type Error = String;

    fn try_from(row: IdeaRow) -> Result<Self, Self::Error> {
        let skills = Skills::new(&row.skills).map_err(|err| format!("skills: {err}"))?;
        Ok(Self {
            id: IdeaId::from_uuid(row.id),
            founder_id: UserId::from_uuid(row.founder_id),
            title: row.title,
            description: row.description,
            equity_range: row.equity_range,
            salary_range: row.salary_range,
            skills,
            created_at: row.created_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ApplicationRow {
    pub id: Uuid,
    pub idea_id: Uuid,
    pub developer_id: Uuid,
    pub proposal: String,
    pub equity_request: String,
    pub salary_request: String,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub developer_profile_snapshot: serde_json::Value,
}

impl TryFrom<&Application> for ApplicationRow {
    type Error = String;

    fn try_from(application: &Application) -> Result<Self, Self::Error> {
        let snapshot = serde_json::to_value(&application.developer_profile_snapshot)
            .map_err(|err| format!("snapshot: {err}"))?;
        Ok(Self {
            id: *application.id.as_uuid(),
            idea_id: *application.idea_id.as_uuid(),
            developer_id: *application.developer_id.as_uuid(),
            proposal: application.proposal.clone(),
            equity_request: application.equity_request.clone(),
            salary_request: application.salary_request.clone(),
            status: application.status.as_str().to_owned(),
            rejection_reason: application.status.rejection_reason().map(str::to_owned),
            created_at: application.created_at,
            developer_profile_snapshot: snapshot,
        })
    }
}

impl TryFrom<ApplicationRow> for Application {
    type Error = String;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        let status = ApplicationStatus::from_parts(&row.status, row.rejection_reason)
            .map_err(|err| err.to_string())?;
        let snapshot: ProfileSnapshot = serde_json::from_value(row.developer_profile_snapshot)
            .map_err(|err| format!("snapshot: {err}"))?;
        Ok(Self {
            id: ApplicationId::from_uuid(row.id),
            idea_id: IdeaId::from_uuid(row.idea_id),
            developer_id: UserId::from_uuid(row.developer_id),
            proposal: row.proposal,
            equity_request: row.equity_request,
            salary_request: row.salary_request,
            status,
            created_at: row.created_at,
            developer_profile_snapshot: snapshot,
        })
    }
}
