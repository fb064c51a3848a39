//! Idea handlers.
//!
//! ```text
//! GET    /api/v1/ideas
//! POST   /api/v1/ideas {"title":"...","description":"...","equityRange":"5-10%","salaryRange":"60k","skills":"Rust, Postgres"}
//! GET    /api/v1/ideas/{id}
//! PUT    /api/v1/ideas/{id}
//! DELETE /api/v1/ideas/{id}
//! GET    /api/v1/users/me/ideas
//! ```
//!
//! Browsing is public; writes require the owning founder's session.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Idea, IdeaDraft, IdeaId, Skills};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, IdeaSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, draft_error, parse_uuid};

const IDEA_ID: FieldName = FieldName::new("ideaId");

/// Skills as a JSON list or as comma-separated form input.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SkillsInput {
    /// `["Rust", "Postgres"]`
    List(Vec<String>),
    /// `"Rust, Postgres"`
    Csv(String),
}

impl TryFrom<SkillsInput> for Skills {
    type Error = Error;

    fn try_from(value: SkillsInput) -> Result<Self, Self::Error> {
        match value {
            SkillsInput::List(entries) => Skills::new(entries),
            SkillsInput::Csv(raw) => Skills::from_csv(&raw),
        }
        .map_err(draft_error)
    }
}

/// Body for creating or replacing an idea.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRequest {
    #[schema(example = "Marketplace for co-founders")]
    pub title: String,
    pub description: String,
    #[schema(example = "5-10%")]
    pub equity_range: String,
    #[schema(example = "60k")]
    pub salary_range: String,
    pub skills: SkillsInput,
}

impl TryFrom<IdeaRequest> for IdeaDraft {
    type Error = Error;

    fn try_from(value: IdeaRequest) -> Result<Self, Self::Error> {
        let skills = Skills::try_from(value.skills)?;
        IdeaDraft::new(
            &value.title,
            &value.description,
            &value.equity_range,
            &value.salary_range,
            skills,
        )
        .map_err(draft_error)
    }
}

pub(crate) fn idea_id(raw: &str) -> Result<IdeaId, Error> {
    parse_uuid(raw, IDEA_ID).map(IdeaId::from_uuid)
}

/// All ideas, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/ideas",
    responses(
        (status = 200, description = "Ideas", body = [IdeaSchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["ideas"],
    operation_id = "listIdeas",
    security([])
)]
#[get("/ideas")]
pub async fn list_ideas(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Idea>>> {
    Ok(web::Json(state.ideas_query.list_ideas().await?))
}

/// Post a new idea as the signed-in founder.
#[utoipa::path(
    post,
    path = "/api/v1/ideas",
    request_body = IdeaRequest,
    responses(
        (status = 201, description = "Idea created", body = IdeaSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Only founders post ideas", body = ErrorSchema)
    ),
    tags = ["ideas"],
    operation_id = "createIdea"
)]
#[post("/ideas")]
pub async fn create_idea(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<IdeaRequest>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_caller()?;
    let draft = IdeaDraft::try_from(payload.into_inner())?;
    let idea = state.ideas.create_idea(&caller, draft).await?;
    Ok(HttpResponse::Created().json(idea))
}

/// One idea by id.
#[utoipa::path(
    get,
    path = "/api/v1/ideas/{id}",
    params(("id" = String, Path, description = "Idea id")),
    responses(
        (status = 200, description = "Idea", body = IdeaSchema),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "Idea not found", body = ErrorSchema)
    ),
    tags = ["ideas"],
    operation_id = "fetchIdea",
    security([])
)]
#[get("/ideas/{id}")]
pub async fn fetch_idea(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Idea>> {
    let id = idea_id(&path)?;
    Ok(web::Json(state.ideas_query.fetch_idea(&id).await?))
}

/// Replace an idea's editable fields.
#[utoipa::path(
    put,
    path = "/api/v1/ideas/{id}",
    params(("id" = String, Path, description = "Idea id")),
    request_body = IdeaRequest,
    responses(
        (status = 200, description = "Updated idea", body = IdeaSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the idea's founder", body = ErrorSchema),
        (status = 404, description = "Idea not found", body = ErrorSchema)
    ),
    tags = ["ideas"],
    operation_id = "updateIdea"
)]
#[put("/ideas/{id}")]
pub async fn update_idea(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<IdeaRequest>,
) -> ApiResult<web::Json<Idea>> {
    let caller = session.require_caller()?;
    let id = idea_id(&path)?;
    let draft = IdeaDraft::try_from(payload.into_inner())?;
    Ok(web::Json(state.ideas.update_idea(&caller, &id, draft).await?))
}

/// Delete an idea. Its applications are left in place.
#[utoipa::path(
    delete,
    path = "/api/v1/ideas/{id}",
    params(("id" = String, Path, description = "Idea id")),
    responses(
        (status = 204, description = "Idea deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the idea's founder", body = ErrorSchema),
        (status = 404, description = "Idea not found", body = ErrorSchema)
    ),
    tags = ["ideas"],
    operation_id = "deleteIdea"
)]
#[delete("/ideas/{id}")]
pub async fn delete_idea(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_caller()?;
    let id = idea_id(&path)?;
    state.ideas.delete_idea(&caller, &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Ideas posted by the signed-in founder, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/users/me/ideas",
    responses(
        (status = 200, description = "Own ideas", body = [IdeaSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["ideas"],
    operation_id = "listOwnIdeas"
)]
#[get("/users/me/ideas")]
pub async fn list_own_ideas(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Idea>>> {
    let caller = session.require_caller()?;
    Ok(web::Json(
        state.ideas_query.list_ideas_by_founder(&caller.user_id).await?,
    ))
}

#[cfg(test)]
#[path = "ideas_tests.rs"]
mod tests;
