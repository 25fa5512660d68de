//! End-to-end handler tests over the in-memory repositories.

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};

use board_core::domain::{NewPost, NewUser};
use board_shared::validation::messages;

use super::configure_routes;
use crate::state::AppState;

fn test_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure_routes)
}

async fn seed_author(state: &AppState, name: &str) -> i64 {
    state
        .users
        .create(NewUser::new(name.to_string(), 30, Some("hiking".to_string())))
        .await
        .unwrap()
        .id
}

async fn seed_post(state: &AppState, user_id: i64, n: usize) -> i64 {
    state
        .posts
        .create(NewPost::new(user_id, format!("title {n}"), format!("content {n}")))
        .await
        .unwrap()
        .id
}

#[actix_web::test]
async fn list_users_without_users_is_no_content() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::get().uri("/api/v1/users").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(res).await.is_empty());
}

#[actix_web::test]
async fn list_users_returns_every_user() {
    let state = AppState::in_memory();
    seed_author(&state, "Ada").await;
    seed_author(&state, "Linus").await;
    let app = test::init_service(test_app(state)).await;

    let req = test::TestRequest::get().uri("/api/v1/users").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn create_user_echoes_the_request() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "name": "Ada", "age": 36, "hobby": "chess" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["age"], 36);
    assert_eq!(body["hobby"], "chess");
    assert!(body["id"].is_i64());
    assert!(body["createdAt"].is_string());
}

#[rstest]
#[case(json!({ "age": 20, "hobby": "chess" }))]
#[case(json!({ "name": null, "age": 20 }))]
#[case(json!({ "name": "", "age": 20 }))]
#[case(json!({ "name": "   ", "age": 20 }))]
#[actix_web::test]
async fn create_user_with_blank_name_is_rejected(#[case] payload: Value) {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(payload)
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "message": messages::BLANK_NAME }));
}

#[actix_web::test]
async fn create_user_with_negative_age_is_rejected() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "name": "Ada", "age": -1 }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], messages::NEGATIVE_AGE);
}

#[actix_web::test]
async fn malformed_body_falls_back_to_invalid_argument() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], messages::INVALID_ARGUMENT);
}

#[actix_web::test]
async fn create_post_for_missing_user_is_rejected() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .set_json(json!({ "title": "Hello", "content": "World", "userId": 404 }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "There is no such user.");

    let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn create_then_fetch_round_trips() {
    let state = AppState::in_memory();
    let ada = seed_author(&state, "Ada").await;
    let app = test::init_service(test_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .set_json(json!({ "title": "Hello", "content": "World", "userId": ada }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(res).await;
    assert_eq!(created["authorName"], "Ada");
    assert!(created.get("updatedAt").is_none());

    let uri = format!("/api/v1/posts/{}", created["id"]);
    let req = test::TestRequest::get().uri(&uri).to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let detail: Value = test::read_body_json(res).await;
    assert_eq!(detail["id"], created["id"]);
    assert_eq!(detail["title"], "Hello");
    assert_eq!(detail["content"], "World");
    assert_eq!(detail["authorName"], "Ada");
    assert!(detail["updatedAt"].is_string());
}

#[actix_web::test]
async fn fetch_missing_post_is_rejected() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::get().uri("/api/v1/posts/12").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "message": "There is no such post." }));
}

#[actix_web::test]
async fn non_numeric_post_id_is_rejected() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::get().uri("/api/v1/posts/abc").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], messages::INVALID_ARGUMENT);
}

#[actix_web::test]
async fn update_post_keeps_id_and_author() {
    let state = AppState::in_memory();
    let ada = seed_author(&state, "Ada").await;
    let id = seed_post(&state, ada, 1).await;
    let app = test::init_service(test_app(state)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/posts/{id}"))
        .set_json(json!({ "title": "Edited", "content": "Edited body" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Edited");
    assert_eq!(body["content"], "Edited body");
    assert_eq!(body["authorName"], "Ada");

    let created_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(body["createdAt"].clone()).unwrap();
    let updated_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(body["updatedAt"].clone()).unwrap();
    assert!(updated_at >= created_at);
}

#[actix_web::test]
async fn update_missing_post_is_rejected() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::put()
        .uri("/api/v1/posts/3")
        .set_json(json!({ "title": "Edited", "content": "Edited body" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "There is no such post.");
}

#[actix_web::test]
async fn update_with_blank_title_is_rejected() {
    let state = AppState::in_memory();
    let ada = seed_author(&state, "Ada").await;
    let id = seed_post(&state, ada, 1).await;
    let app = test::init_service(test_app(state)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/posts/{id}"))
        .set_json(json!({ "title": " ", "content": "Edited body" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], messages::BLANK_TITLE);
}

#[actix_web::test]
async fn list_posts_without_posts_is_no_content() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn list_posts_returns_the_requested_page() {
    let state = AppState::in_memory();
    let ada = seed_author(&state, "Ada").await;
    for n in 1..=35 {
        seed_post(&state, ada, n).await;
    }
    let app = test::init_service(test_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/posts?page=3&size=10")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["isEmpty"], false);
    assert_eq!(body["totalPages"], 4);
    assert_eq!(body["totalElements"], 35);
    let content = body["content"].as_array().unwrap();
    assert_eq!(content.len(), 5);
    assert_eq!(content[0]["title"], "title 31");
    assert_eq!(content[0]["authorName"], "Ada");
    assert!(content[0].get("updatedAt").is_none());
}

#[rstest]
#[case("/api/v1/posts")]
#[case("/api/v1/posts?size=0")]
#[case("/api/v1/posts?page=-1")]
#[case("/api/v1/posts?page=first&size=many")]
#[actix_web::test]
async fn list_posts_falls_back_to_default_paging(#[case] uri: &str) {
    let state = AppState::in_memory();
    let ada = seed_author(&state, "Ada").await;
    for n in 1..=25 {
        seed_post(&state, ada, n).await;
    }
    let app = test::init_service(test_app(state)).await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["totalElements"], 25);
    let content = body["content"].as_array().unwrap();
    assert_eq!(content.len(), 20);
    assert_eq!(content[0]["title"], "title 1");
}

#[actix_web::test]
async fn list_posts_far_past_the_end_is_no_content() {
    let state = AppState::in_memory();
    let ada = seed_author(&state, "Ada").await;
    seed_post(&state, ada, 1).await;
    let app = test::init_service(test_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/posts?page=2147483647&size=2000")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn list_posts_honors_sort() {
    let state = AppState::in_memory();
    let ada = seed_author(&state, "Ada").await;
    for n in 1..=3 {
        seed_post(&state, ada, n).await;
    }
    let app = test::init_service(test_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/posts?sort=id,desc")
        .to_request();
    let res = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(res).await;
    let ids: Vec<i64> = body["content"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[actix_web::test]
async fn list_posts_with_unknown_sort_is_rejected() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/posts?sort=password")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], messages::UNSUPPORTED_SORT);
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test::init_service(test_app(AppState::in_memory())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "ok");
}
