//! UUID-backed identifiers for users, ideas, and applications.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised when parsing an identifier from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier was empty.
    Empty,
    /// The identifier was not a canonical UUID.
    Invalid,
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identifier must not be empty"),
            Self::Invalid => write!(f, "identifier must be a valid UUID"),
        }
    }
}

impl std::error::Error for IdentifierError {}

fn parse_uuid(raw: &str) -> Result<Uuid, IdentifierError> {
    if raw.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if raw.trim() != raw {
        return Err(IdentifierError::Invalid);
    }
    Uuid::parse_str(raw).map_err(|_| IdentifierError::Invalid)
}

macro_rules! define_uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(Uuid);

        impl $name {
            /// Validate and construct the identifier from text.
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdentifierError> {
                parse_uuid(id.as_ref()).map(Self)
            }

            /// Generate a new random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an already-parsed UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_uuid_id! {
    /// Stable user identifier issued by the identity provider.
    UserId
}

define_uuid_id! {
    /// Identifier of an idea posting.
    IdeaId
}

define_uuid_id! {
    /// Identifier of a developer's application to an idea.
    ApplicationId
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", IdentifierError::Empty)]
    #[case("not-a-uuid", IdentifierError::Invalid)]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", IdentifierError::Invalid)]
    fn rejects_malformed_ids(#[case] raw: &str, #[case] expected: IdentifierError) {
        assert_eq!(IdeaId::new(raw).expect_err("malformed"), expected);
    }

    #[test]
    fn serde_uses_plain_strings() {
        let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialise");
        assert_eq!(json, "\"3fa85f64-5717-4562-b3fc-2c963f66afa6\"");
        let back: UserId = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, id);
    }
}
