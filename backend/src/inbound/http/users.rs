//! Profile handlers for the signed-in user.
//!
//! ```text
//! GET /api/v1/users/me
//! PUT /api/v1/users/me {"githubProfile":"https://github.com/ada"}
//! ```

use actix_web::{get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ProfileUpdate, User, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::user_error;

/// Partial profile update for `PUT /api/v1/users/me`.
///
/// Omitted fields are left alone; an empty string clears an optional
/// contact field.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub whatsapp_number: Option<String>,
}

impl TryFrom<ProfileUpdateRequest> for ProfileUpdate {
    type Error = Error;

    fn try_from(value: ProfileUpdateRequest) -> Result<Self, Self::Error> {
        let name = value
            .name
            .map(|raw| UserName::new(raw).map_err(user_error))
            .transpose()?;
        Ok(Self {
            name,
            github_profile: value.github_profile,
            linkedin_profile: value.linkedin_profile,
            whatsapp_number: value.whatsapp_number,
        })
    }
}

/// Fetch the caller's own profile.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Profile", body = UserSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Profile not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/users/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<User>> {
    let caller = session.require_caller()?;
    let user = state.profiles.fetch_profile(&caller.user_id).await?;
    Ok(web::Json(user))
}

/// Update the caller's own profile. Role and email are fixed.
#[utoipa::path(
    put,
    path = "/api/v1/users/me",
    request_body = ProfileUpdateRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Profile not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateCurrentUser"
)]
#[put("/users/me")]
pub async fn update_current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ProfileUpdateRequest>,
) -> ApiResult<web::Json<User>> {
    let caller = session.require_caller()?;
    let update = ProfileUpdate::try_from(payload.into_inner())?;
    let user = state
        .profile_updates
        .update_profile(&caller.user_id, update)
        .await?;
    Ok(web::Json(user))
}
