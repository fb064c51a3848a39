//! Handler tests for idea routes over in-memory stores.

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{memory_state, register_request, session_cookie, test_app};

fn idea_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Match founders with developers",
        "equityRange": "5-10%",
        "salaryRange": "60k",
        "skills": "Rust, Postgres"
    })
}

macro_rules! signed_up {
    ($app:expr, $email:expr, $role:expr) => {{
        let res = actix_test::call_service($app, register_request($email, $role, true).to_request())
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        session_cookie(&res)
    }};
}

fn post_idea(cookie: Cookie<'static>, body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/api/v1/ideas")
        .cookie(cookie)
        .set_json(body)
}

#[actix_web::test]
async fn founders_post_and_everyone_browses() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let founder = signed_up!(&app, "fay@example.com", "founder");

    let first = actix_test::call_service(&app, post_idea(founder.clone(), idea_body("First")).to_request()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first: Value = actix_test::read_body_json(first).await;
    assert_eq!(first["skills"], json!(["Rust", "Postgres"]));
    let second = actix_test::call_service(&app, post_idea(founder, idea_body("Second")).to_request()).await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/ideas").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let ideas: Value = actix_test::read_body_json(res).await;
    let titles: Vec<&str> = ideas
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|idea| idea["title"].as_str())
        .collect();
    assert_eq!(titles, ["Second", "First"]);

    let id = first["id"].as_str().expect("id");
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/ideas/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn developers_cannot_post_ideas() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let developer = signed_up!(&app, "dev@example.com", "developer");

    let res = actix_test::call_service(&app, post_idea(developer, idea_body("Nope")).to_request()).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[rstest]
#[case(json!({"title": "", "description": "d", "equityRange": "e", "salaryRange": "s", "skills": ["Rust"]}), "title")]
#[case(json!({"title": "t", "description": "d", "equityRange": "e", "salaryRange": "s", "skills": " , "}), "skills")]
#[case(json!({"title": "t", "description": "d", "equityRange": "e", "salaryRange": "s", "skills": []}), "skills")]
#[actix_web::test]
async fn invalid_drafts_are_rejected(#[case] body: Value, #[case] field: &str) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let founder = signed_up!(&app, "fay@example.com", "founder");

    let res = actix_test::call_service(&app, post_idea(founder, body).to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], field);
}

#[actix_web::test]
async fn only_the_owner_edits_or_deletes() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let owner = signed_up!(&app, "fay@example.com", "founder");
    let rival = signed_up!(&app, "rex@example.com", "founder");
    let res = actix_test::call_service(&app, post_idea(owner.clone(), idea_body("Mine")).to_request()).await;
    let idea: Value = actix_test::read_body_json(res).await;
    let uri = format!("/api/v1/ideas/{}", idea["id"].as_str().expect("id"));

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&uri)
            .cookie(rival.clone())
            .set_json(idea_body("Stolen"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).cookie(rival).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&uri)
            .cookie(owner.clone())
            .set_json(idea_body("Renamed"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = actix_test::read_body_json(res).await;
    assert_eq!(updated["title"], "Renamed");
    assert_eq!(updated["createdAt"], idea["createdAt"]);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).cookie(owner).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn own_ideas_listing_is_scoped_to_the_caller() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let fay = signed_up!(&app, "fay@example.com", "founder");
    let rex = signed_up!(&app, "rex@example.com", "founder");
    actix_test::call_service(&app, post_idea(fay.clone(), idea_body("Fay's")).to_request()).await;
    actix_test::call_service(&app, post_idea(rex, idea_body("Rex's")).to_request()).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/users/me/ideas")
            .cookie(fay)
            .to_request(),
    )
    .await;

    let ideas: Value = actix_test::read_body_json(res).await;
    let ideas = ideas.as_array().expect("array");
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0]["title"], "Fay's");
}

#[actix_web::test]
async fn malformed_idea_ids_are_bad_requests() {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/ideas/not-a-uuid")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "invalid_uuid");
}
