//! Idea postings owned by founders.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IdeaId, UserId};

/// Validation errors raised while building an idea or application draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    /// A required text field was blank once trimmed.
    EmptyField { field: &'static str },
    /// No usable skill entries were supplied.
    EmptySkills,
}

impl fmt::Display for DraftValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::EmptySkills => write!(f, "skills must list at least one entry"),
        }
    }
}

impl std::error::Error for DraftValidationError {}

impl DraftValidationError {
    /// Wire name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field } => field,
            Self::EmptySkills => "skills",
        }
    }
}

pub(crate) fn require_text(
    field: &'static str,
    raw: &str,
) -> Result<String, DraftValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DraftValidationError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}

/// Ordered, non-empty list of required skills.
///
/// # Examples
/// ```
/// use cofounder::domain::Skills;
///
/// let skills = Skills::from_csv("Rust, Postgres,, React ").expect("skills");
/// assert_eq!(skills.as_slice(), ["Rust", "Postgres", "React"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Skills(Vec<String>);

impl Skills {
    /// Build from individual entries; blanks are dropped and order kept.
    pub fn new<I, S>(entries: I) -> Result<Self, DraftValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skills: Vec<String> = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_owned())
            .filter(|entry| !entry.is_empty())
            .collect();
        if skills.is_empty() {
            return Err(DraftValidationError::EmptySkills);
        }
        Ok(Self(skills))
    }

    /// Build from comma-separated input as typed into a form.
    pub fn from_csv(raw: &str) -> Result<Self, DraftValidationError> {
        Self::new(raw.split(','))
    }

    /// Skills in submission order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        self.0.as_slice()
    }
}

impl From<Skills> for Vec<String> {
    fn from(value: Skills) -> Self {
        value.0
    }
}

impl TryFrom<Vec<String>> for Skills {
    type Error = DraftValidationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated founder-editable idea fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDraft {
    title: String,
    description: String,
    equity_range: String,
    salary_range: String,
    skills: Skills,
}

impl IdeaDraft {
    /// Validate raw text fields; each must be non-empty once trimmed.
    pub fn new(
        title: &str,
        description: &str,
        equity_range: &str,
        salary_range: &str,
        skills: Skills,
    ) -> Result<Self, DraftValidationError> {
        Ok(Self {
            title: require_text("title", title)?,
            description: require_text("description", description)?,
            equity_range: require_text("equityRange", equity_range)?,
            salary_range: require_text("salaryRange", salary_range)?,
            skills,
        })
    }

    /// Materialise a new idea owned by `founder_id`.
    #[must_use]
    pub fn into_idea(self, id: IdeaId, founder_id: UserId, created_at: DateTime<Utc>) -> Idea {
        Idea {
            id,
            founder_id,
            title: self.title,
            description: self.description,
            equity_range: self.equity_range,
            salary_range: self.salary_range,
            skills: self.skills,
            created_at,
        }
    }

    /// Overwrite the editable fields of `idea`, keeping id, owner, and
    /// creation time.
    #[must_use]
    pub fn apply_to(self, idea: Idea) -> Idea {
        Idea {
            title: self.title,
            description: self.description,
            equity_range: self.equity_range,
            salary_range: self.salary_range,
            skills: self.skills,
            ..idea
        }
    }
}

/// Idea posting.
///
/// ## Invariants
/// - `founder_id` and `created_at` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: IdeaId,
    pub founder_id: UserId,
    pub title: String,
    pub description: String,
    pub equity_range: String,
    pub salary_range: String,
    pub skills: Skills,
    pub created_at: DateTime<Utc>,
}
