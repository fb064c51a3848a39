//! Application lifecycle handlers.
//!
//! ```text
//! POST   /api/v1/ideas/{id}/applications {"proposal":"...","equityRequest":"2%","salaryRequest":"50k"}
//! POST   /api/v1/applications/{id}/decision {"decision":"reject","reason":"not a fit"}
//! DELETE /api/v1/applications/{id}
//! GET    /api/v1/users/me/applications
//! GET    /api/v1/users/me/idea-applications
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Application, ApplicationDraft, ApplicationId, DecisionKind, DeveloperApplicationView, Error,
    FounderApplicationView,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::ideas::idea_id;
use crate::inbound::http::schemas::{
    ApplicationSchema, DeveloperApplicationViewSchema, ErrorSchema, FounderApplicationViewSchema,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, draft_error, parse_uuid};

const APPLICATION_ID: FieldName = FieldName::new("applicationId");

/// Body for `POST /api/v1/ideas/{id}/applications`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub proposal: String,
    #[schema(example = "2%")]
    pub equity_request: String,
    #[schema(example = "50k")]
    pub salary_request: String,
}

impl TryFrom<ApplicationRequest> for ApplicationDraft {
    type Error = Error;

    fn try_from(value: ApplicationRequest) -> Result<Self, Self::Error> {
        ApplicationDraft::new(&value.proposal, &value.equity_request, &value.salary_request)
            .map_err(draft_error)
    }
}

/// Founder decision on a pending application.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    /// `accept` or `reject`.
    #[schema(value_type = String, example = "reject")]
    pub decision: DecisionKind,
    /// Required when rejecting; ignored when accepting.
    pub reason: Option<String>,
}

fn application_id(raw: &str) -> Result<ApplicationId, Error> {
    parse_uuid(raw, APPLICATION_ID).map(ApplicationId::from_uuid)
}

/// Apply to an idea as the signed-in developer.
#[utoipa::path(
    post,
    path = "/api/v1/ideas/{id}/applications",
    params(("id" = String, Path, description = "Idea id")),
    request_body = ApplicationRequest,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Only developers apply", body = ErrorSchema),
        (status = 404, description = "Idea not found", body = ErrorSchema),
        (status = 409, description = "Already applied", body = ErrorSchema),
        (status = 422, description = "GitHub or LinkedIn profile missing", body = ErrorSchema)
    ),
    tags = ["applications"],
    operation_id = "submitApplication"
)]
#[post("/ideas/{id}/applications")]
pub async fn submit_application(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<ApplicationRequest>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_caller()?;
    let idea_id = idea_id(&path)?;
    let draft = ApplicationDraft::try_from(payload.into_inner())?;
    let application = state
        .applications
        .submit_application(&caller, &idea_id, draft)
        .await?;
    Ok(HttpResponse::Created().json(application))
}

/// Accept or reject a pending application to one of the caller's ideas.
#[utoipa::path(
    post,
    path = "/api/v1/applications/{id}/decision",
    params(("id" = String, Path, description = "Application id")),
    request_body = DecisionRequest,
    responses(
        (status = 200, description = "Decided application", body = ApplicationSchema),
        (status = 400, description = "Rejection without a reason", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the idea's founder", body = ErrorSchema),
        (status = 404, description = "Application or idea not found", body = ErrorSchema),
        (status = 409, description = "Already decided", body = ErrorSchema)
    ),
    tags = ["applications"],
    operation_id = "decideApplication"
)]
#[post("/applications/{id}/decision")]
pub async fn decide_application(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<DecisionRequest>,
) -> ApiResult<web::Json<Application>> {
    let caller = session.require_caller()?;
    let id = application_id(&path)?;
    let DecisionRequest { decision, reason } = payload.into_inner();
    let application = state
        .applications
        .decide(&caller, &id, decision, reason)
        .await?;
    Ok(web::Json(application))
}

/// Withdraw one of the caller's own applications.
#[utoipa::path(
    delete,
    path = "/api/v1/applications/{id}",
    params(("id" = String, Path, description = "Application id")),
    responses(
        (status = 204, description = "Application withdrawn"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the applying developer", body = ErrorSchema),
        (status = 404, description = "Application not found", body = ErrorSchema)
    ),
    tags = ["applications"],
    operation_id = "deleteApplication"
)]
#[delete("/applications/{id}")]
pub async fn delete_application(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_caller()?;
    let id = application_id(&path)?;
    state.applications.delete_application(&caller, &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// The caller's own applications with idea and, once accepted, founder
/// contact details.
#[utoipa::path(
    get,
    path = "/api/v1/users/me/applications",
    responses(
        (status = 200, description = "Own applications", body = [DeveloperApplicationViewSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["applications"],
    operation_id = "listOwnApplications"
)]
#[get("/users/me/applications")]
pub async fn list_own_applications(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<DeveloperApplicationView>>> {
    let caller = session.require_caller()?;
    let views = state
        .applications_query
        .list_applications_for_developer(&caller.user_id)
        .await?;
    Ok(web::Json(views))
}

/// Applications to the caller's ideas with applicant details.
#[utoipa::path(
    get,
    path = "/api/v1/users/me/idea-applications",
    responses(
        (status = 200, description = "Applications to own ideas", body = [FounderApplicationViewSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["applications"],
    operation_id = "listIdeaApplications"
)]
#[get("/users/me/idea-applications")]
pub async fn list_idea_applications(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<FounderApplicationView>>> {
    let caller = session.require_caller()?;
    let views = state
        .applications_query
        .list_applications_for_founder_ideas(&caller.user_id)
        .await?;
    Ok(web::Json(views))
}

#[cfg(test)]
#[path = "applications_tests.rs"]
mod tests;
