//! Precondition checked before a developer may apply to an idea.

use serde_json::json;

use super::{Error, User};

/// Message shown when a developer lacks the required profile links.
pub const INCOMPLETE_PROFILE_MESSAGE: &str =
    "GitHub and LinkedIn profiles required before applying";

fn is_present(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Profile fields that block applying, in wire naming.
#[must_use]
pub fn missing_profile_fields(user: &User) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !is_present(user.github_profile.as_ref()) {
        missing.push("githubProfile");
    }
    if !is_present(user.linkedin_profile.as_ref()) {
        missing.push("linkedinProfile");
    }
    missing
}

/// Fail with `incomplete_profile` unless both GitHub and LinkedIn links are
/// present.
///
/// # Examples
/// ```
/// use cofounder::domain::{EmailAddress, ErrorCode, Role, User, UserId, UserName, ensure_complete_profile};
///
/// let user = User::new(
///     UserId::random(),
///     EmailAddress::new("dev@example.com").unwrap(),
///     Role::Developer,
///     UserName::new("Dev").unwrap(),
/// );
/// let err = ensure_complete_profile(&user).unwrap_err();
/// assert_eq!(err.code(), ErrorCode::IncompleteProfile);
/// ```
pub fn ensure_complete_profile(user: &User) -> Result<(), Error> {
    let missing = missing_profile_fields(user);
    if missing.is_empty() {
        return Ok(());
    }
    Err(Error::incomplete_profile(INCOMPLETE_PROFILE_MESSAGE)
        .with_details(json!({ "missingFields": missing })))
}
