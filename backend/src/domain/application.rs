//! Developer applications and their status state machine.
//!
//! ```text
//! submit ──> pending ──accept──> accepted
//!                    └─reject──> rejected (reason required)
//! ```
//!
//! Both decided states are terminal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::idea::require_text;
use super::{ApplicationId, DraftValidationError, IdeaId, User, UserId};

/// Lifecycle status. The rejection reason lives inside the rejected variant
/// so it exists exactly when the application is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Awaiting the founder's decision.
    Pending,
    /// Accepted by the founder; contacts are revealed.
    Accepted,
    /// Rejected by the founder.
    Rejected {
        /// Non-blank explanation shown to the developer.
        #[serde(rename = "rejectionReason")]
        reason: String,
    },
}

impl ApplicationStatus {
    /// Storage/wire label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected { .. } => "rejected",
        }
    }

    /// Reason supplied with a rejection.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            Self::Rejected { reason } => Some(reason.as_str()),
            Self::Pending | Self::Accepted => None,
        }
    }

    /// Whether the founder may still decide.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the founder accepted the application.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Rebuild a status from its stored columns.
    pub fn from_parts(label: &str, reason: Option<String>) -> Result<Self, StatusParseError> {
        match (label, reason) {
            ("pending", None) => Ok(Self::Pending),
            ("accepted", None) => Ok(Self::Accepted),
            ("rejected", Some(reason)) if !reason.trim().is_empty() => {
                Ok(Self::Rejected { reason })
            }
            (label, reason) => Err(StatusParseError {
                label: label.to_owned(),
                has_reason: reason.is_some(),
            }),
        }
    }

    /// Status reached by applying `decision`.
    ///
    /// # Examples
    /// ```
    /// use cofounder::domain::{ApplicationStatus, Decision};
    ///
    /// let accepted = ApplicationStatus::Pending.apply(Decision::Accept).unwrap();
    /// assert!(accepted.apply(Decision::Accept).is_err());
    /// ```
    pub fn apply(&self, decision: Decision) -> Result<Self, InvalidTransition> {
        if !self.is_pending() {
            return Err(InvalidTransition {
                from: self.as_str(),
            });
        }
        Ok(match decision {
            Decision::Accept => Self::Accepted,
            Decision::Reject { reason } => Self::Rejected { reason },
        })
    }
}

/// Stored status columns that do not form a valid status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParseError {
    pub label: String,
    pub has_reason: bool,
}

impl fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status {:?} is inconsistent with rejection reason presence ({})",
            self.label, self.has_reason
        )
    }
}

impl std::error::Error for StatusParseError {}

/// Attempt to decide an application that is no longer pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition {
    pub from: &'static str,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "application is already {}", self.from)
    }
}

impl std::error::Error for InvalidTransition {}

/// Founder's requested outcome before the reason is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    /// Accept the application.
    Accept,
    /// Reject the application.
    Reject,
}

/// Validated founder decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Move a pending application to accepted.
    Accept,
    /// Move a pending application to rejected with a trimmed reason.
    Reject {
        /// Reason recorded on the rejected application.
        reason: String,
    },
}

/// A rejection was requested without a usable reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingReason;

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rejection reason is required")
    }
}

impl std::error::Error for MissingReason {}

impl Decision {
    /// Combine the requested kind with the optional reason.
    ///
    /// A reason supplied with an acceptance is ignored; a rejection needs a
    /// reason that is non-empty once trimmed.
    pub fn from_parts(kind: DecisionKind, reason: Option<&str>) -> Result<Self, MissingReason> {
        match kind {
            DecisionKind::Accept => Ok(Self::Accept),
            DecisionKind::Reject => reason
                .map(str::trim)
                .filter(|trimmed| !trimmed.is_empty())
                .map(|trimmed| Self::Reject {
                    reason: trimmed.to_owned(),
                })
                .ok_or(MissingReason),
        }
    }
}

/// Copy of the developer's contact fields taken at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub name: String,
    pub email: String,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub whatsapp_number: Option<String>,
}

impl From<&User> for ProfileSnapshot {
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

/// Validated developer-supplied application fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft {
    proposal: String,
    equity_request: String,
    salary_request: String,
}

impl ApplicationDraft {
    /// Validate raw fields; each must be non-empty once trimmed.
    pub fn new(
        proposal: &str,
        equity_request: &str,
        salary_request: &str,
    ) -> Result<Self, DraftValidationError> {
        Ok(Self {
            proposal: require_text("proposal", proposal)?,
            equity_request: require_text("equityRequest", equity_request)?,
            salary_request: require_text("salaryRequest", salary_request)?,
        })
    }

    /// Materialise a pending application.
    #[must_use]
    pub fn into_application(
        self,
        id: ApplicationId,
        idea_id: IdeaId,
        developer: &User,
        created_at: DateTime<Utc>,
    ) -> Application {
        Application {
            id,
            idea_id,
            developer_id: developer.id,
            proposal: self.proposal,
            equity_request: self.equity_request,
            salary_request: self.salary_request,
            status: ApplicationStatus::Pending,
            created_at,
            developer_profile_snapshot: ProfileSnapshot::from(developer),
        }
    }
}

/// A developer's application to an idea.
///
/// ## Invariants
/// - at most one per `(idea_id, developer_id)`.
/// - `developer_profile_snapshot` never changes after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub idea_id: IdeaId,
    pub developer_id: UserId,
    pub proposal: String,
    pub equity_request: String,
    pub salary_request: String,
    #[serde(flatten)]
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub developer_profile_snapshot: ProfileSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn reject_requires_reason(#[case] reason: Option<&str>) {
        assert_eq!(
            Decision::from_parts(DecisionKind::Reject, reason),
            Err(MissingReason)
        );
    }

    #[test]
    fn accept_ignores_reason() {
        assert_eq!(
            Decision::from_parts(DecisionKind::Accept, Some("whatever")),
            Ok(Decision::Accept)
        );
    }

    #[rstest]
    #[case(ApplicationStatus::Accepted, Decision::Accept)]
    #[case(ApplicationStatus::Accepted, Decision::Reject { reason: "late".into() })]
    #[case(ApplicationStatus::Rejected { reason: "no".into() }, Decision::Accept)]
    fn decided_states_are_terminal(#[case] from: ApplicationStatus, #[case] decision: Decision) {
        let err = from.apply(decision).expect_err("terminal");
        assert_eq!(err.from, from.as_str());
    }

    #[test]
    fn reject_carries_reason() {
        let next = ApplicationStatus::Pending
            .apply(Decision::Reject {
                reason: "not a fit".to_owned(),
            })
            .expect("pending can be rejected");
        assert_eq!(next.rejection_reason(), Some("not a fit"));
    }

    #[rstest]
    #[case("pending", Some("x".to_owned()))]
    #[case("rejected", None)]
    #[case("archived", None)]
    fn from_parts_rejects_inconsistent_columns(#[case] label: &str, #[case] reason: Option<String>) {
        assert!(ApplicationStatus::from_parts(label, reason).is_err());
    }

    #[test]
    fn status_serialises_flat_with_reason() {
        let value = serde_json::to_value(ApplicationStatus::Rejected {
            reason: "no".to_owned(),
        })
        .expect("serialise");
        assert_eq!(value, json!({ "status": "rejected", "rejectionReason": "no" }));
        let pending = serde_json::to_value(ApplicationStatus::Pending).expect("serialise");
        assert_eq!(pending, json!({ "status": "pending" }));
    }
}
