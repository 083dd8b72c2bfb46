use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{messages, ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ClientResult;
use crate::models::ClientComment;
use crate::repository::ClientCommentRepository;
use crate::service::ClientService;

pub const TAG: &str = "clients";

/// OpenAPI documentation for the clients API
#[derive(OpenApi)]
#[openapi(
    paths(save_comment, get_comments),
    components(schemas(ClientComment, ErrorResponse)),
    tags(
        (name = TAG, description = "Client comment endpoints")
    )
)]
pub struct ApiDoc;

/// Create the clients router; mounted verbatim under `/clients`.
pub fn router<R: ClientCommentRepository + 'static>(service: ClientService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/save-comment", post(save_comment))
        .route("/get-comments", get(get_comments))
        .with_state(shared_service)
}

/// Save or update a client comment
///
/// POST /clients/save-comment
#[utoipa::path(
    post,
    path = "/save-comment",
    tag = TAG,
    request_body = ClientComment,
    responses(
        (status = 201, description = "Comment saved", body = ClientComment),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Save failed; message carries the cause", body = ErrorResponse)
    )
)]
async fn save_comment<R: ClientCommentRepository>(
    State(service): State<Arc<ClientService<R>>>,
    ValidatedJson(comment): ValidatedJson<ClientComment>,
) -> ClientResult<impl IntoResponse> {
    let mut comment = service.save_comment(comment).await?;
    comment.message = Some(messages::REQUEST_PROCESSED.to_string());
    Ok((StatusCode::CREATED, Json(comment)))
}

/// List all client comments
///
/// GET /clients/get-comments
#[utoipa::path(
    get,
    path = "/get-comments",
    tag = TAG,
    responses(
        (status = 200, description = "All comments, oldest first", body = Vec<ClientComment>),
        (status = 500, description = "Lookup failed; message carries the cause", body = ErrorResponse)
    )
)]
async fn get_comments<R: ClientCommentRepository>(
    State(service): State<Arc<ClientService<R>>>,
) -> ClientResult<Json<Vec<ClientComment>>> {
    let comments = service.get_comments().await?;
    Ok(Json(comments))
}
