//! Translate driven-port failures into client-facing domain errors.
//!
//! Raw store text is logged, never returned: connection and query failures
//! surface as `service_unavailable` with a generic message.

use tracing::error;

use super::Error;
use super::ports::{
    ApplicationPersistenceError, IdeaPersistenceError, IdentityError, UserPersistenceError,
};

const STORE_UNAVAILABLE: &str = "the data store is temporarily unavailable";

fn store_unavailable(store: &'static str, detail: &str) -> Error {
    error!(store, detail, "store request failed");
    Error::service_unavailable(STORE_UNAVAILABLE)
}

fn malformed(store: &'static str, detail: &str) -> Error {
    error!(store, detail, "malformed stored record");
    Error::invalid_request(format!("stored {store} record is malformed"))
}

pub(crate) fn map_user_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::Connection { message } | UserPersistenceError::Query { message } => {
            store_unavailable("user", &message)
        }
        UserPersistenceError::Duplicate { id } => {
            Error::conflict(format!("a profile already exists for user {id}"))
        }
        UserPersistenceError::Malformed { message } => malformed("user", &message),
    }
}

pub(crate) fn map_idea_error(err: IdeaPersistenceError) -> Error {
    match err {
        IdeaPersistenceError::Connection { message } | IdeaPersistenceError::Query { message } => {
            store_unavailable("idea", &message)
        }
        IdeaPersistenceError::Malformed { message } => malformed("idea", &message),
    }
}

pub(crate) fn map_application_error(err: ApplicationPersistenceError) -> Error {
    match err {
        ApplicationPersistenceError::Connection { message }
        | ApplicationPersistenceError::Query { message } => {
            store_unavailable("application", &message)
        }
        ApplicationPersistenceError::Duplicate { .. } => {
            Error::duplicate_application("you have already applied to this idea")
        }
        ApplicationPersistenceError::Malformed { message } => malformed("application", &message),
    }
}

pub(crate) fn map_identity_error(err: IdentityError) -> Error {
    match err {
        IdentityError::EmailTaken { email } => {
            Error::conflict(format!("an account already exists for {email}"))
        }
        IdentityError::InvalidCredentials => Error::unauthorized("invalid credentials"),
        IdentityError::Connection { message } | IdentityError::Query { message } => {
            store_unavailable("identity", &message)
        }
    }
}
