//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the JSON each domain type serialises to and register
//! it under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The resource already exists.
    #[schema(rename = "conflict")]
    Conflict,
    /// The developer already applied to this idea.
    #[schema(rename = "duplicate_application")]
    DuplicateApplication,
    /// The application has already been decided.
    #[schema(rename = "invalid_transition")]
    InvalidTransition,
    /// GitHub or LinkedIn profile missing; see `details.missingFields`.
    #[schema(rename = "incomplete_profile")]
    IncompleteProfile,
    /// A rejection was submitted without a reason.
    #[schema(rename = "missing_reason")]
    MissingReason,
    /// A backing store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "name must not be empty")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Role`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Role)]
pub enum RoleSchema {
    #[schema(rename = "founder")]
    Founder,
    #[schema(rename = "developer")]
    Developer,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "ada@example.com")]
    email: String,
    role: RoleSchema,
    #[schema(example = "Ada Lovelace")]
    name: String,
    github_profile: Option<String>,
    linkedin_profile: Option<String>,
    whatsapp_number: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Idea`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Idea, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct IdeaSchema {
    id: String,
    founder_id: String,
    #[schema(example = "Co-founder matching")]
    title: String,
    description: String,
    #[schema(example = "5-10%")]
    equity_range: String,
    #[schema(example = "60k")]
    salary_range: String,
    #[schema(example = json!(["Rust", "Postgres"]))]
    skills: Vec<String>,
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::ApplicationStatus`] labels.
#[derive(ToSchema)]
#[schema(as = crate::domain::ApplicationStatus)]
pub enum ApplicationStatusSchema {
    #[schema(rename = "pending")]
    Pending,
    #[schema(rename = "accepted")]
    Accepted,
    #[schema(rename = "rejected")]
    Rejected,
}

/// OpenAPI schema for [`crate::domain::ProfileSnapshot`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ProfileSnapshot, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProfileSnapshotSchema {
    name: String,
    email: String,
    github_profile: Option<String>,
    linkedin_profile: Option<String>,
    whatsapp_number: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Application`], as seen by its
/// developer.
#[derive(ToSchema)]
#[schema(as = crate::domain::Application, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ApplicationSchema {
    id: String,
    idea_id: String,
    developer_id: String,
    proposal: String,
    #[schema(example = "2%")]
    equity_request: String,
    #[schema(example = "50k")]
    salary_request: String,
    status: ApplicationStatusSchema,
    /// Present only when `status` is `rejected`.
    rejection_reason: Option<String>,
    created_at: String,
    developer_profile_snapshot: ProfileSnapshotSchema,
}

/// OpenAPI schema for [`crate::domain::ApplicationSummary`]: an application
/// without its submission snapshot.
#[derive(ToSchema)]
#[schema(as = crate::domain::ApplicationSummary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ApplicationSummarySchema {
    id: String,
    idea_id: String,
    developer_id: String,
    proposal: String,
    equity_request: String,
    salary_request: String,
    status: ApplicationStatusSchema,
    rejection_reason: Option<String>,
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::ContactCard`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ContactCard, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactCardSchema {
    name: String,
    email: String,
    github_profile: Option<String>,
    linkedin_profile: Option<String>,
    whatsapp_number: Option<String>,
}

/// OpenAPI schema for [`crate::domain::ApplicantCard`]. `email` and
/// `whatsappNumber` are null until the application is accepted.
#[derive(ToSchema)]
#[schema(as = crate::domain::ApplicantCard, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ApplicantCardSchema {
    name: String,
    github_profile: Option<String>,
    linkedin_profile: Option<String>,
    email: Option<String>,
    whatsapp_number: Option<String>,
}

/// OpenAPI schema for [`crate::domain::DeveloperApplicationView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DeveloperApplicationView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeveloperApplicationViewSchema {
    application: ApplicationSchema,
    /// Null once the idea has been deleted.
    idea: Option<IdeaSchema>,
    /// Null until the application is accepted.
    founder: Option<ContactCardSchema>,
}

/// OpenAPI schema for [`crate::domain::FounderApplicationView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FounderApplicationView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FounderApplicationViewSchema {
    application: ApplicationSummarySchema,
    idea: IdeaSchema,
    /// Null when the applicant's account no longer exists.
    applicant: Option<ApplicantCardSchema>,
}
