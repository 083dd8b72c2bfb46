//! Handler tests for the clients domain

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_clients::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

const REQUEST_PROCESSED: &str = "Request processed successfully.";

fn app() -> axum::Router {
    let service = ClientService::new(InMemoryClientCommentRepository::new());
    handlers::router(service)
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_save_comment_returns_201_with_id_and_message() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/save-comment",
            json!({
                "email": "client@example.com",
                "comment": "Great work on the tournament page"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let comment: ClientComment = json_body(response.into_body()).await;
    assert_eq!(comment.id, Some(1));
    assert!(!comment.replied);
    assert_eq!(comment.message.as_deref(), Some(REQUEST_PROCESSED));
}

#[tokio::test]
async fn test_save_comment_invalid_email_is_400() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/save-comment",
            json!({ "email": "nope", "comment": "hello" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_comment_missing_body_field_is_client_error() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/save-comment",
            json!({ "email": "client@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_comments_lists_saved_comments() {
    let service = ClientService::new(InMemoryClientCommentRepository::new());
    for text in ["first", "second"] {
        service
            .save_comment(ClientComment {
                id: None,
                email: "client@example.com".to_string(),
                comment: text.to_string(),
                replied: false,
                message: None,
            })
            .await
            .unwrap();
    }
    let app = handlers::router(service);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/get-comments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let comments: Vec<ClientComment> = json_body(response.into_body()).await;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, Some(1));
    assert_eq!(comments[0].comment, "first");
    assert_eq!(comments[1].id, Some(2));
    // list entries carry no status message
    assert!(comments.iter().all(|c| c.message.is_none()));
}

#[tokio::test]
async fn test_update_comment_through_save_endpoint() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json(
            "/save-comment",
            json!({ "email": "client@example.com", "comment": "pending" }),
        ))
        .await
        .unwrap();
    let created: ClientComment = json_body(created.into_body()).await;

    let response = app
        .oneshot(post_json(
            "/save-comment",
            json!({
                "id": created.id,
                "email": "client@example.com",
                "comment": "pending",
                "replied": true
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let updated: ClientComment = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert!(updated.replied);
}

#[tokio::test]
async fn test_update_unknown_comment_reports_failure_in_body() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/save-comment",
            json!({
                "id": 99,
                "email": "client@example.com",
                "comment": "ghost"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("99"));
}
