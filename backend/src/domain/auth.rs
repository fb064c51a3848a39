//! Authentication primitives: sign-in credentials and registration input.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::{EmailAddress, Role, User, UserId, UserName, UserValidationError};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Email was missing or malformed.
    Email(UserValidationError),
    /// Password was shorter than [`MIN_PASSWORD_LEN`].
    PasswordTooShort,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(err) => err.fmt(f),
            Self::PasswordTooShort => write!(
                f,
                "password must be at least {MIN_PASSWORD_LEN} characters"
            ),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Validated email/password pair.
///
/// ## Invariants
/// - `email` is normalised by [`EmailAddress::new`].
/// - `password` has at least [`MIN_PASSWORD_LEN`] characters and retains
///   caller-provided whitespace.
///
/// # Examples
/// ```
/// use cofounder::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("ada@example.com", "secret").unwrap();
/// assert_eq!(creds.email().as_ref(), "ada@example.com");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let email = EmailAddress::new(email).map_err(CredentialsValidationError::Email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsValidationError::PasswordTooShort);
        }
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised email used for identity lookups.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Everything needed to open a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub credentials: Credentials,
    pub name: UserName,
    pub role: Role,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub whatsapp_number: Option<String>,
}

impl Registration {
    /// Build the profile record for the id issued by the identity provider.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.credentials.email, self.role, self.name).with_contacts(
            self.github_profile,
            self.linkedin_profile,
            self.whatsapp_number,
        )
    }
}
