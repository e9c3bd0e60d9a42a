//! Category handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::Payload;
use crate::api::AppState;
use crate::config::KIND_CATEGORY;
use crate::domain::{Category, CategoryPayload};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/category/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = [Category])
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.category_service.list().await?;
    Ok(Json(categories))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    Payload(payload): Payload<CategoryPayload>,
) -> AppResult<Created<Category>> {
    let category = state.category_service.create(payload).await?;
    Ok(Created(category))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/api/category/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Category>> {
    let category = state.category_service.get(id).await?;
    Ok(Json(category))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/api/category/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<CategoryPayload>,
) -> AppResult<Json<Category>> {
    let category = state.category_service.update(id, payload).await?;
    Ok(Json(category))
}

/// Delete a category, detaching its articles
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.category_service.delete(id).await?;
    Ok(Json(ApiResponse::message(format!("{} {} deleted", KIND_CATEGORY, id))))
}
