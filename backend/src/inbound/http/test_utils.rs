//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::{App, web};

use mockable::DefaultClock;

use crate::domain::{AccountService, ApplicationLifecycleService, IdeaService};
use crate::outbound::memory::{
    InMemoryApplicationRepository, InMemoryIdeaRepository, InMemoryIdentityProvider,
    InMemoryUserRepository,
};

use super::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set on `response`.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// HTTP state over fresh in-memory stores and the system clock.
pub fn memory_state() -> HttpState {
    let users = Arc::new(InMemoryUserRepository::new());
    let ideas = Arc::new(InMemoryIdeaRepository::new());
    let accounts = Arc::new(AccountService::new(
        Arc::new(InMemoryIdentityProvider::new()),
        users.clone(),
    ));
    let idea_service = Arc::new(IdeaService::new(ideas.clone(), Arc::new(DefaultClock)));
    let lifecycle = Arc::new(ApplicationLifecycleService::new(
        Arc::new(InMemoryApplicationRepository::new()),
        ideas,
        users,
        Arc::new(DefaultClock),
    ));
    HttpState {
        accounts: accounts.clone(),
        profiles: accounts.clone(),
        profile_updates: accounts,
        ideas: idea_service.clone(),
        ideas_query: idea_service,
        applications: lifecycle.clone(),
        applications_query: lifecycle,
    }
}

/// The full `/api/v1` surface over `state`, with test sessions.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .service(super::api_scope())
}

/// `POST /api/v1/accounts` with password `secret1`; `complete` adds the
/// GitHub and LinkedIn links developers need before applying.
pub fn register_request(email: &str, role: &str, complete: bool) -> actix_web::test::TestRequest {
    let links = complete.then(|| {
        let handle = email.split('@').next().unwrap_or(email);
        (
            format!("https://github.com/{handle}"),
            format!("https://linkedin.com/in/{handle}"),
        )
    });
    actix_web::test::TestRequest::post()
        .uri("/api/v1/accounts")
        .set_json(serde_json::json!({
            "email": email,
            "password": "secret1",
            "name": email.split('@').next().unwrap_or(email),
            "role": role,
            "githubProfile": links.as_ref().map(|(github, _)| github),
            "linkedinProfile": links.as_ref().map(|(_, linkedin)| linkedin),
            "whatsappNumber": "+15550100",
        }))
}
