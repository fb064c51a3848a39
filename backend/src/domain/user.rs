//! Marketplace user profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UserId;

/// Validation errors for user profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Email was blank.
    EmptyEmail,
    /// Email lacked a local part or domain.
    InvalidEmail,
    /// Display name was blank.
    EmptyName,
    /// Role was neither `founder` nor `developer`.
    UnknownRole { value: String },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must look like name@domain"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::UnknownRole { value } => {
                write!(f, "role must be founder or developer, got {value}")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Marketplace role fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Posts ideas and decides on applications.
    Founder,
    /// Applies to ideas.
    Developer,
}

impl Role {
    /// Lowercase wire/storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Founder => "founder",
            Self::Developer => "developer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "founder" => Ok(Self::Founder),
            "developer" => Ok(Self::Developer),
            other => Err(UserValidationError::UnknownRole {
                value: other.to_owned(),
            }),
        }
    }
}

/// Login email, trimmed and lowercased.
///
/// ## Invariants
/// - exactly one `@`, with non-empty text on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalise an email address.
    ///
    /// # Examples
    /// ```
    /// use cofounder::domain::EmailAddress;
    ///
    /// let email = EmailAddress::new("  Ada@Example.com ").expect("valid email");
    /// assert_eq!(email.as_ref(), "ada@example.com");
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        let mut parts = trimmed.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(UserValidationError::InvalidEmail);
        };
        if local.is_empty() || domain.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_lowercase()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Name shown to the other party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate a display name; surrounding whitespace is dropped.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Trim an optional free-text contact field, treating blank input as absent.
pub(crate) fn normalise_contact(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Marketplace user record keyed by the identity provider's id.
///
/// ## Invariants
/// - `role` and `email` never change after registration.
/// - optional contact fields are either absent or non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub role: Role,
    pub name: UserName,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub whatsapp_number: Option<String>,
}

impl User {
    /// Build a user with no optional contact fields.
    #[must_use]
    pub fn new(id: UserId, email: EmailAddress, role: Role, name: UserName) -> Self {
        Self {
            id,
            email,
            role,
            name,
            github_profile: None,
            linkedin_profile: None,
            whatsapp_number: None,
        }
    }

    /// Attach contact fields, normalising blanks to `None`.
    #[must_use]
    pub fn with_contacts(
        mut self,
        github_profile: Option<String>,
        linkedin_profile: Option<String>,
        whatsapp_number: Option<String>,
    ) -> Self {
        self.github_profile = normalise_contact(github_profile);
        self.linkedin_profile = normalise_contact(linkedin_profile);
        self.whatsapp_number = normalise_contact(whatsapp_number);
        self
    }
}

/// Partial profile update submitted by the owning user.
///
/// `None` leaves a field untouched; for the optional contact fields an empty
/// string clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<UserName>,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub whatsapp_number: Option<String>,
}

impl ProfileUpdate {
    /// Apply the update to `user`, keeping identity fields unchanged.
    ///
    /// # Examples
    /// ```
    /// use cofounder::domain::{EmailAddress, ProfileUpdate, Role, User, UserId, UserName};
    ///
    /// let user = User::new(
    ///     UserId::random(),
    ///     EmailAddress::new("dev@example.com").unwrap(),
    ///     Role::Developer,
    ///     UserName::new("Dev").unwrap(),
    /// );
    /// let update = ProfileUpdate {
    ///     linkedin_profile: Some("https://linkedin.com/in/dev".into()),
    ///     ..ProfileUpdate::default()
    /// };
    /// let updated = update.apply(user);
    /// assert_eq!(updated.linkedin_profile.as_deref(), Some("https://linkedin.com/in/dev"));
    /// ```
    #[must_use]
    pub fn apply(self, mut user: User) -> User {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(github) = self.github_profile {
            user.github_profile = normalise_contact(Some(github));
        }
        if let Some(linkedin) = self.linkedin_profile {
            user.linkedin_profile = normalise_contact(Some(linkedin));
        }
        if let Some(whatsapp) = self.whatsapp_number {
            user.whatsapp_number = normalise_contact(Some(whatsapp));
        }
        user
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
