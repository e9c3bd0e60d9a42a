//! Article handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::Payload;
use crate::api::AppState;
use crate::config::KIND_ARTICLE;
use crate::domain::{Article, ArticlePayload};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create article routes
pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route(
            "/article/:id",
            get(get_article).put(update_article).delete(delete_article),
        )
}

/// List all articles
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "Articles",
    responses(
        (status = 200, description = "All articles", body = [Article])
    )
)]
pub async fn list_articles(State(state): State<AppState>) -> AppResult<Json<Vec<Article>>> {
    let articles = state.article_service.list().await?;
    Ok(Json(articles))
}

/// Create an article
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = "Articles",
    request_body = ArticlePayload,
    responses(
        (status = 201, description = "Article created", body = Article),
        (status = 400, description = "Validation error or unknown category/author")
    )
)]
pub async fn create_article(
    State(state): State<AppState>,
    Payload(payload): Payload<ArticlePayload>,
) -> AppResult<Created<Article>> {
    let article = state.article_service.create(payload).await?;
    Ok(Created(article))
}

/// Get article by ID
#[utoipa::path(
    get,
    path = "/api/article/{id}",
    tag = "Articles",
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article found", body = Article),
        (status = 404, description = "Article not found")
    )
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Article>> {
    let article = state.article_service.get(id).await?;
    Ok(Json(article))
}

/// Update an article. Absent fields keep their value; `null` clears
/// `category` or `author`.
#[utoipa::path(
    put,
    path = "/api/article/{id}",
    tag = "Articles",
    params(("id" = i32, Path, description = "Article ID")),
    request_body = ArticlePayload,
    responses(
        (status = 200, description = "Article updated", body = Article),
        (status = 400, description = "Validation error or unknown category/author"),
        (status = 404, description = "Article not found")
    )
)]
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<ArticlePayload>,
) -> AppResult<Json<Article>> {
    let article = state.article_service.update(id, payload).await?;
    Ok(Json(article))
}

/// Delete an article together with its comments and author
#[utoipa::path(
    delete,
    path = "/api/article/{id}",
    tag = "Articles",
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article deleted"),
        (status = 404, description = "Article not found")
    )
)]
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.article_service.delete(id).await?;
    Ok(Json(ApiResponse::message(format!("{} {} deleted", KIND_ARTICLE, id))))
}
