//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers in [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa. The session cookie is declared as the security
//! scheme. Swagger UI serves the document in debug builds.

use crate::inbound::http::accounts::{LoginRequest, RegisterRequest, SessionResponse};
use crate::inbound::http::applications::{ApplicationRequest, DecisionRequest};
use crate::inbound::http::ideas::{IdeaRequest, SkillsInput};
use crate::inbound::http::schemas::{
    ApplicantCardSchema, ApplicationSchema, ApplicationStatusSchema, ApplicationSummarySchema,
    ContactCardSchema, DeveloperApplicationViewSchema, ErrorCodeSchema, ErrorSchema,
    FounderApplicationViewSchema, IdeaSchema, ProfileSnapshotSchema, RoleSchema, UserSchema,
};
use crate::inbound::http::users::ProfileUpdateRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/accounts or POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Co-founder marketplace API",
        description = "Founders post ideas, developers apply, founders decide."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::users::update_current_user,
        crate::inbound::http::ideas::list_ideas,
        crate::inbound::http::ideas::create_idea,
        crate::inbound::http::ideas::fetch_idea,
        crate::inbound::http::ideas::update_idea,
        crate::inbound::http::ideas::delete_idea,
        crate::inbound::http::ideas::list_own_ideas,
        crate::inbound::http::applications::submit_application,
        crate::inbound::http::applications::decide_application,
        crate::inbound::http::applications::delete_application,
        crate::inbound::http::applications::list_own_applications,
        crate::inbound::http::applications::list_idea_applications,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RoleSchema,
        UserSchema,
        IdeaSchema,
        ApplicationStatusSchema,
        ProfileSnapshotSchema,
        ApplicationSchema,
        ApplicationSummarySchema,
        ContactCardSchema,
        ApplicantCardSchema,
        DeveloperApplicationViewSchema,
        FounderApplicationViewSchema,
        RegisterRequest,
        LoginRequest,
        SessionResponse,
        ProfileUpdateRequest,
        IdeaRequest,
        SkillsInput,
        ApplicationRequest,
        DecisionRequest,
    )),
    tags(
        (name = "accounts", description = "Registration and sessions"),
        (name = "users", description = "The signed-in user's profile"),
        (name = "ideas", description = "Idea postings"),
        (name = "applications", description = "Applications and founder decisions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("crate.domain.Error", "traceId")]
    #[case("crate.domain.User", "linkedinProfile")]
    #[case("crate.domain.Idea", "createdAt")]
    #[case("crate.domain.Application", "rejectionReason")]
    #[case("crate.domain.ApplicantCard", "email")]
    fn registered_schemas_carry_wire_fields(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");

        assert_object_schema_has_field(schema, field);
    }

    #[rstest]
    #[case("/api/v1/accounts")]
    #[case("/api/v1/login")]
    #[case("/api/v1/users/me")]
    #[case("/api/v1/ideas/{id}")]
    #[case("/api/v1/ideas/{id}/applications")]
    #[case("/api/v1/applications/{id}/decision")]
    #[case("/api/v1/users/me/idea-applications")]
    #[case("/health/ready")]
    fn documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn declares_session_cookie_security() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
