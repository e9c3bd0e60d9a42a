//! Comment handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::Payload;
use crate::api::AppState;
use crate::config::KIND_COMMENT;
use crate::domain::{Comment, CommentPayload};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create comment routes
pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", get(list_comments).post(create_comment))
        .route(
            "/comment/:id",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
}

/// List all comments
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = "Comments",
    responses(
        (status = 200, description = "All comments", body = [Comment])
    )
)]
pub async fn list_comments(State(state): State<AppState>) -> AppResult<Json<Vec<Comment>>> {
    let comments = state.comment_service.list().await?;
    Ok(Json(comments))
}

/// Create a comment
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "Comments",
    request_body = CommentPayload,
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 400, description = "Validation error or unknown article")
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Payload(payload): Payload<CommentPayload>,
) -> AppResult<Created<Comment>> {
    let comment = state.comment_service.create(payload).await?;
    Ok(Created(comment))
}

/// Get comment by ID
#[utoipa::path(
    get,
    path = "/api/comment/{id}",
    tag = "Comments",
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment found", body = Comment),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Comment>> {
    let comment = state.comment_service.get(id).await?;
    Ok(Json(comment))
}

/// Update a comment. Absent fields keep their value.
#[utoipa::path(
    put,
    path = "/api/comment/{id}",
    tag = "Comments",
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = CommentPayload,
    responses(
        (status = 200, description = "Comment updated", body = Comment),
        (status = 400, description = "Validation error or unknown article"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<CommentPayload>,
) -> AppResult<Json<Comment>> {
    let comment = state.comment_service.update(id, payload).await?;
    Ok(Json(comment))
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/api/comment/{id}",
    tag = "Comments",
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.comment_service.delete(id).await?;
    Ok(Json(ApiResponse::message(format!("{} {} deleted", KIND_COMMENT, id))))
}
