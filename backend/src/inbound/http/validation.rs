//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejected request body becomes `invalid_request` with a `details`
//! object naming the offending field and a stable sub-code.

use serde_json::json;
use uuid::Uuid;

use crate::domain::{CredentialsValidationError, DraftValidationError, Error, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    EmptyField,
    InvalidEmail,
    PasswordTooShort,
    UnknownRole,
    InvalidUuid,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::EmptyField => "empty_field",
            Self::InvalidEmail => "invalid_email",
            Self::PasswordTooShort => "password_too_short",
            Self::UnknownRole => "unknown_role",
            Self::InvalidUuid => "invalid_uuid",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

fn field_error(field: &str, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let FieldName(field) = field;
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn draft_error(err: DraftValidationError) -> Error {
    field_error(err.field(), ErrorCode::EmptyField, err.to_string())
}

pub(crate) fn user_error(err: UserValidationError) -> Error {
    let (field, code) = match &err {
        UserValidationError::EmptyEmail => ("email", ErrorCode::EmptyField),
        UserValidationError::InvalidEmail => ("email", ErrorCode::InvalidEmail),
        UserValidationError::EmptyName => ("name", ErrorCode::EmptyField),
        UserValidationError::UnknownRole { .. } => ("role", ErrorCode::UnknownRole),
    };
    field_error(field, code, err.to_string())
}

pub(crate) fn credentials_error(err: CredentialsValidationError) -> Error {
    match &err {
        CredentialsValidationError::Email(inner) => user_error(inner.clone()),
        CredentialsValidationError::PasswordTooShort => {
            field_error("password", ErrorCode::PasswordTooShort, err.to_string())
        }
    }
}
