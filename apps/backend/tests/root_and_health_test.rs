mod common;

use actix_web::test;
use serde_json::json;

use common::spawn_test_app;

#[actix_web::test]
async fn test_root_returns_welcome_message() {
    let app = spawn_test_app().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Welcome to the FastAPI project!"}));
}

#[actix_web::test]
async fn test_root_message_is_independent_of_item_state() {
    let app = spawn_test_app().await;

    let req = test::TestRequest::post()
        .uri("/items/")
        .set_json(json!({"name": "a", "description": "b", "price": 1.5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let req = test::TestRequest::get().uri("/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Welcome to the FastAPI project!");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = spawn_test_app().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    assert_eq!(body, "ok");
}

#[actix_web::test]
async fn test_responses_carry_request_id() {
    let app = spawn_test_app().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header should be present");
    assert!(!request_id.is_empty());
}
