//! HTTP inbound adapter exposing REST endpoints.

pub mod accounts;
pub mod applications;
pub mod error;
pub mod health;
pub mod ideas;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::{Scope, web};

/// Every `/api/v1` endpoint. Callers wrap the scope with session middleware.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(accounts::register)
        .service(accounts::login)
        .service(accounts::logout)
        .service(users::current_user)
        .service(users::update_current_user)
        .service(ideas::list_ideas)
        .service(ideas::create_idea)
        .service(ideas::fetch_idea)
        .service(ideas::update_idea)
        .service(ideas::delete_idea)
        .service(ideas::list_own_ideas)
        .service(applications::submit_application)
        .service(applications::decide_application)
        .service(applications::delete_application)
        .service(applications::list_own_applications)
        .service(applications::list_idea_applications)
}
