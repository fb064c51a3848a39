//! Domain primitives, services, and ports.
//!
//! Purpose: model the marketplace (users, ideas, applications) with strongly
//! typed entities, enforce the application lifecycle and visibility rules in
//! services, and describe the edges of the hexagon as ports. Nothing here
//! depends on actix or Diesel.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`User`], [`Idea`], [`Application`]: the three stored documents.
//! - [`AccountService`], [`IdeaService`], [`ApplicationLifecycleService`]:
//!   driving-port implementations.
//! - [`ports`]: driven and driving port traits.

pub mod account_service;
pub mod application;
pub mod application_service;
pub mod auth;
pub mod caller;
pub mod error;
pub mod idea;
pub mod idea_service;
pub mod ids;
pub mod ports;
pub mod profile_gate;
pub mod trace_id;
pub mod user;
pub mod visibility;

mod port_error_mapping;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use self::account_service::AccountService;
pub use self::application::{
    Application, ApplicationDraft, ApplicationStatus, Decision, DecisionKind, InvalidTransition,
    MissingReason, ProfileSnapshot, StatusParseError,
};
pub use self::application_service::ApplicationLifecycleService;
pub use self::auth::{Credentials, CredentialsValidationError, MIN_PASSWORD_LEN, Registration};
pub use self::caller::Caller;
pub use self::error::{Error, ErrorCode};
pub use self::idea::{DraftValidationError, Idea, IdeaDraft, Skills};
pub use self::idea_service::IdeaService;
pub use self::ids::{ApplicationId, IdeaId, IdentifierError, UserId};
pub use self::profile_gate::{
    INCOMPLETE_PROFILE_MESSAGE, ensure_complete_profile, missing_profile_fields,
};
pub use self::trace_id::TraceId;
pub use self::user::{EmailAddress, ProfileUpdate, Role, User, UserName, UserValidationError};
pub use self::visibility::{
    ApplicantCard, ApplicationSummary, ContactCard, DeveloperApplicationView,
    FounderApplicationView,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use cofounder::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
