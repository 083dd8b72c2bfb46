//! Handler tests for the events domain
//!
//! These verify the HTTP layer over the in-memory repository:
//! - Request deserialization and rejection of malformed bodies
//! - Response serialization and status codes
//! - The response message contract

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_events::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

const REQUEST_PROCESSED: &str = "Request processed successfully.";

fn app() -> axum::Router {
    let service = EventService::new(InMemoryEventsRepository::new());
    handlers::router(service)
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_save_event_returns_201_with_processed_message() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/save-event?isCreate=true&isUpdate=false",
            json!({
                "name": "Launch2024",
                "game": "Valorant",
                "description": "Season opener"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let event: Event = json_body(response.into_body()).await;
    assert_eq!(event.name, "Launch2024");
    assert!(event.id.is_some());
    assert_eq!(event.message.as_deref(), Some(REQUEST_PROCESSED));
}

#[tokio::test]
async fn test_save_event_overwrites_caller_message() {
    let app = app();

    // A caller-supplied message never survives into the response
    let response = app
        .oneshot(post_json(
            "/save-event?isCreate=true&isUpdate=false",
            json!({
                "name": "Launch2024",
                "game": "Valorant",
                "message": "my own message"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let event: Event = json_body(response.into_body()).await;
    assert_eq!(event.message.as_deref(), Some(REQUEST_PROCESSED));
}

#[tokio::test]
async fn test_save_event_missing_required_field_is_client_error() {
    let app = app();

    // No "name": rejected by the extractor before the service runs
    let response = app
        .oneshot(post_json(
            "/save-event?isCreate=true&isUpdate=false",
            json!({ "game": "Valorant" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_save_event_missing_flags_is_client_error() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/save-event",
            json!({ "name": "Launch2024", "game": "Valorant" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_event_contradictory_flags_is_domain_error() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/save-event?isCreate=true&isUpdate=true",
            json!({ "name": "Launch2024", "game": "Valorant" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = json_body(response.into_body()).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("isCreate and isUpdate")
    );
}

#[tokio::test]
async fn test_get_event_returns_200_with_payload() {
    let service = EventService::new(InMemoryEventsRepository::new());
    let flags = SaveFlags {
        is_create: true,
        is_update: false,
    };
    service
        .save_or_update_event(
            Event {
                id: None,
                name: "Launch2024".to_string(),
                game: "Valorant".to_string(),
                description: "Season opener".to_string(),
                date: None,
                message: None,
            },
            flags,
        )
        .await
        .unwrap();
    let app = handlers::router(service);

    let response = app.oneshot(get("/get-event/Launch2024")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let event: Event = json_body(response.into_body()).await;
    assert_eq!(event.name, "Launch2024");
    assert_eq!(event.game, "Valorant");
    assert_eq!(event.message.as_deref(), Some(REQUEST_PROCESSED));
}

#[tokio::test]
async fn test_get_missing_event_reports_failure_in_body() {
    let app = app();

    let response = app.oneshot(get("/get-event/Ghost")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("Ghost"));
}

#[tokio::test]
async fn test_save_team_returns_201() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/save-team?isCreate=true&isUpdate=false",
            json!({
                "name": "Sentinels",
                "game": "Valorant",
                "captain_email": "captain@example.com"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let team: Team = json_body(response.into_body()).await;
    assert_eq!(team.name, "Sentinels");
    assert_eq!(team.message.as_deref(), Some(REQUEST_PROCESSED));
}

#[tokio::test]
async fn test_save_team_invalid_email_is_400() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/save-team?isCreate=true&isUpdate=false",
            json!({
                "name": "Sentinels",
                "game": "Valorant",
                "captain_email": "not-an-email"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_viewer_returns_200() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/save-viewer",
            json!({ "email": "x@example.com", "event_id": 7 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let viewer: Viewer = json_body(response.into_body()).await;
    assert_eq!(viewer.email, "x@example.com");
    assert_eq!(viewer.message.as_deref(), Some(REQUEST_PROCESSED));
}

#[tokio::test]
async fn test_is_viewer_unknown_pairing_is_200_false() {
    let app = app();

    let response = app
        .oneshot(get("/is-viewer?email=x@example.com&eventId=7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let viewed: bool = json_body(response.into_body()).await;
    assert!(!viewed);
}

#[tokio::test]
async fn test_is_viewer_after_save_is_true() {
    let app = app();

    let save = app
        .clone()
        .oneshot(post_json(
            "/save-viewer",
            json!({ "email": "x@example.com", "event_id": 7 }),
        ))
        .await
        .unwrap();
    assert_eq!(save.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/is-viewer?email=x@example.com&eventId=7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let viewed: bool = json_body(response.into_body()).await;
    assert!(viewed);
}
