//! HTTP surface against an in-memory store.

mod support;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use blog_api::api::{create_router, AppState};
use blog_api::domain::AuthorCascade;

async fn app() -> Router {
    let db = support::database().await;
    let state = AppState::from_config(Arc::new(db), &support::config(AuthorCascade::Always));
    create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_database() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn article_lifecycle_over_http() {
    let app = app().await;

    let (status, category) = send(&app, "POST", "/api/categories", Some(json!({"name": "Rust"}))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, author) = send(
        &app,
        "POST",
        "/api/authors",
        Some(json!({"firstname": "Ferris", "lastname": "Crab"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, article) = send(
        &app,
        "POST",
        "/api/articles",
        Some(json!({
            "name": "Traits",
            "description": "Static and dynamic dispatch",
            "category": category["id"],
            "author": author["id"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(article["category"], category["id"]);
    let id = article["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/api/article/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, article);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/article/{}", id),
        Some(json!({"category": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["category"], Value::Null);
    assert_eq!(updated["name"], "Traits");

    let (status, listed) = send(&app, "GET", "/api/articles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([updated]));

    let (status, deleted) = send(&app, "DELETE", &format!("/api/article/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], true);

    let (status, body) = send(&app, "GET", &format!("/api/article/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Article not found");

    // Author went with the article
    let author_uri = format!("/api/author/{}", author["id"]);
    let (status, _) = send(&app, "GET", &author_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payloads_are_400() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/api/categories", Some(json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "name");

    let (status, body) = send(&app, "POST", "/api/comments", Some(json!({"content": "Hi"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "article");

    let (status, body) = send(&app, "POST", "/api/categories", Some(json!({"name": 5}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, listed) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn deleting_category_over_http_detaches_articles() {
    let app = app().await;

    let (_, category) = send(&app, "POST", "/api/categories", Some(json!({"name": "Temp"}))).await;
    let (_, article) = send(
        &app,
        "POST",
        "/api/articles",
        Some(json!({"name": "Kept", "description": "Survives", "category": category["id"]})),
    )
    .await;

    let uri = format!("/api/category/{}", category["id"]);
    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("Category {} deleted", category["id"]));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, fetched) = send(&app, "GET", &format!("/api/article/{}", article["id"]), None).await;
    assert_eq!(fetched["category"], Value::Null);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app().await;

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "Blog API");
    assert!(doc["paths"]["/api/article/{id}"].is_object());
}
