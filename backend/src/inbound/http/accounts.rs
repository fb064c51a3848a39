//! Account handlers: registration, sign-in, and sign-out.
//!
//! ```text
//! POST /api/v1/accounts {"email":"ada@example.com","password":"secret1","name":"Ada","role":"founder"}
//! POST /api/v1/login {"email":"ada@example.com","password":"secret1"}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Caller, Credentials, Error, Registration, Role, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{credentials_error, user_error};

/// Registration request body for `POST /api/v1/accounts`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// `founder` or `developer`; fixed for the life of the account.
    #[schema(example = "developer")]
    pub role: String,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub whatsapp_number: Option<String>,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = Error;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        let credentials = Credentials::try_from_parts(&value.email, &value.password)
            .map_err(credentials_error)?;
        let name = UserName::new(&value.name).map_err(user_error)?;
        let role: Role = value.role.parse().map_err(user_error)?;
        Ok(Self {
            credentials,
            name,
            role,
            github_profile: value.github_profile,
            linkedin_profile: value.linkedin_profile,
            whatsapp_number: value.whatsapp_number,
        })
    }
}

/// Sign-in request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
}

/// The signed-in caller returned after registration or sign-in.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub user_id: String,
    #[schema(example = "founder")]
    pub role: String,
}

impl From<Caller> for SessionResponse {
    fn from(caller: Caller) -> Self {
        Self {
            user_id: caller.user_id.to_string(),
            role: caller.role.as_str().to_owned(),
        }
    }
}

/// Open an account and sign the new user in.
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = SessionResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 503, description = "Identity provider unavailable", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "register",
    security([])
)]
#[post("/accounts")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::try_from(payload.into_inner())?;
    let caller = state.accounts.register(registration).await?;
    session.persist_caller(&caller)?;
    Ok(HttpResponse::Created().json(SessionResponse::from(caller)))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SessionResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 503, description = "Identity provider unavailable", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SessionResponse>> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials = Credentials::try_from_parts(&email, &password).map_err(credentials_error)?;
    let caller = state.accounts.sign_in(credentials).await?;
    session.persist_caller(&caller)?;
    Ok(web::Json(SessionResponse::from(caller)))
}

/// Drop the session cookie.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Signed out")),
    tags = ["accounts"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}
