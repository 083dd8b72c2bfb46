use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{messages, ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EventResult;
use crate::models::{Event, IsViewerQuery, SaveFlags, Team, Viewer};
use crate::repository::EventsRepository;
use crate::service::EventService;

pub const TAG: &str = "events";

/// OpenAPI documentation for the events API
#[derive(OpenApi)]
#[openapi(
    paths(save_event, get_event, save_team, get_team, save_viewer, is_viewer),
    components(schemas(Event, Team, Viewer, ErrorResponse)),
    tags(
        (name = TAG, description = "Event management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the events router with all HTTP endpoints.
///
/// The paths are part of the external contract consumed by the other
/// portfolio services; they are mounted verbatim under `/events`.
pub fn router<R: EventsRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/save-event", post(save_event))
        .route("/get-event/{name}", get(get_event))
        .route("/save-team", post(save_team))
        .route("/get-team/{name}", get(get_team))
        .route("/save-viewer", post(save_viewer))
        .route("/is-viewer", get(is_viewer))
        .with_state(shared_service)
}

/// Save or update an event
///
/// POST /events/save-event?isCreate=..&isUpdate=..
#[utoipa::path(
    post,
    path = "/save-event",
    tag = TAG,
    params(SaveFlags),
    request_body = Event,
    responses(
        (status = 201, description = "Event saved", body = Event),
        (status = 400, description = "Invalid request body or flags", body = ErrorResponse),
        (status = 500, description = "Save failed; message carries the cause", body = ErrorResponse)
    )
)]
async fn save_event<R: EventsRepository>(
    State(service): State<Arc<EventService<R>>>,
    Query(flags): Query<SaveFlags>,
    ValidatedJson(event): ValidatedJson<Event>,
) -> EventResult<impl IntoResponse> {
    let mut event = service.save_or_update_event(event, flags).await?;
    event.message = Some(messages::REQUEST_PROCESSED.to_string());
    Ok((StatusCode::CREATED, Json(event)))
}

/// Get an event by name
///
/// GET /events/get-event/{name}
#[utoipa::path(
    get,
    path = "/get-event/{name}",
    tag = TAG,
    params(
        ("name" = String, Path, description = "Event name")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 500, description = "Lookup failed; message carries the cause", body = ErrorResponse)
    )
)]
async fn get_event<R: EventsRepository>(
    State(service): State<Arc<EventService<R>>>,
    Path(name): Path<String>,
) -> EventResult<Json<Event>> {
    let mut event = service.get_event(&name).await?;
    event.message = Some(messages::REQUEST_PROCESSED.to_string());
    Ok(Json(event))
}

/// Save or update a team
///
/// POST /events/save-team?isCreate=..&isUpdate=..
#[utoipa::path(
    post,
    path = "/save-team",
    tag = TAG,
    params(SaveFlags),
    request_body = Team,
    responses(
        (status = 201, description = "Team saved", body = Team),
        (status = 400, description = "Invalid request body or flags", body = ErrorResponse),
        (status = 500, description = "Save failed; message carries the cause", body = ErrorResponse)
    )
)]
async fn save_team<R: EventsRepository>(
    State(service): State<Arc<EventService<R>>>,
    Query(flags): Query<SaveFlags>,
    ValidatedJson(team): ValidatedJson<Team>,
) -> EventResult<impl IntoResponse> {
    let mut team = service.save_or_update_team(team, flags).await?;
    team.message = Some(messages::REQUEST_PROCESSED.to_string());
    Ok((StatusCode::CREATED, Json(team)))
}

/// Get a team by name
///
/// GET /events/get-team/{name}
#[utoipa::path(
    get,
    path = "/get-team/{name}",
    tag = TAG,
    params(
        ("name" = String, Path, description = "Team name")
    ),
    responses(
        (status = 200, description = "Team found", body = Team),
        (status = 500, description = "Lookup failed; message carries the cause", body = ErrorResponse)
    )
)]
async fn get_team<R: EventsRepository>(
    State(service): State<Arc<EventService<R>>>,
    Path(name): Path<String>,
) -> EventResult<Json<Team>> {
    let mut team = service.get_team(&name).await?;
    team.message = Some(messages::REQUEST_PROCESSED.to_string());
    Ok(Json(team))
}

/// Record a viewer for an event
///
/// POST /events/save-viewer
#[utoipa::path(
    post,
    path = "/save-viewer",
    tag = TAG,
    request_body = Viewer,
    responses(
        (status = 200, description = "Viewer recorded", body = Viewer),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Save failed; message carries the cause", body = ErrorResponse)
    )
)]
async fn save_viewer<R: EventsRepository>(
    State(service): State<Arc<EventService<R>>>,
    ValidatedJson(viewer): ValidatedJson<Viewer>,
) -> EventResult<Json<Viewer>> {
    let mut viewer = service.save_viewer(viewer).await?;
    viewer.message = Some(messages::REQUEST_PROCESSED.to_string());
    Ok(Json(viewer))
}

/// Check whether an email address already viewed an event
///
/// GET /events/is-viewer?email=..&eventId=..
#[utoipa::path(
    get,
    path = "/is-viewer",
    tag = TAG,
    params(IsViewerQuery),
    responses(
        (status = 200, description = "Whether the pairing exists", body = bool),
        (status = 500, description = "Lookup failed; message carries the cause", body = ErrorResponse)
    )
)]
async fn is_viewer<R: EventsRepository>(
    State(service): State<Arc<EventService<R>>>,
    Query(query): Query<IsViewerQuery>,
) -> EventResult<Json<bool>> {
    let viewed = service.is_viewer(&query.email, query.event_id).await?;
    Ok(Json(viewed))
}
