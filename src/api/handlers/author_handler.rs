//! Author handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::Payload;
use crate::api::AppState;
use crate::config::KIND_AUTHOR;
use crate::domain::{Author, AuthorPayload};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create author routes
pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(list_authors).post(create_author))
        .route(
            "/author/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
}

/// List all authors
#[utoipa::path(
    get,
    path = "/api/authors",
    tag = "Authors",
    responses(
        (status = 200, description = "All authors", body = [Author])
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.author_service.list().await?;
    Ok(Json(authors))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/api/authors",
    tag = "Authors",
    request_body = AuthorPayload,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    Payload(payload): Payload<AuthorPayload>,
) -> AppResult<Created<Author>> {
    let author = state.author_service.create(payload).await?;
    Ok(Created(author))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/api/author/{id}",
    tag = "Authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author found", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Author>> {
    let author = state.author_service.get(id).await?;
    Ok(Json(author))
}

/// Update an author. Absent fields keep their value.
#[utoipa::path(
    put,
    path = "/api/author/{id}",
    tag = "Authors",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = AuthorPayload,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<AuthorPayload>,
) -> AppResult<Json<Author>> {
    let author = state.author_service.update(id, payload).await?;
    Ok(Json(author))
}

/// Delete an author. Articles keep pointing at the removed id.
#[utoipa::path(
    delete,
    path = "/api/author/{id}",
    tag = "Authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.author_service.delete(id).await?;
    Ok(Json(ApiResponse::message(format!("{} {} deleted", KIND_AUTHOR, id))))
}
