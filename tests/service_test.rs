//! Service write paths: validation, reference checks, partial updates.

mod support;

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::EntityTrait;
use serde_json::json;

use blog_api::config::{SeedConfig, FIXTURE_COUNT};
use blog_api::domain::{
    ArticlePayload, AuthorCascade, AuthorPayload, CategoryPayload, CommentPayload, FieldOrderGate,
};
use blog_api::errors::{AppError, AppResult};
use blog_api::infra::entities::UserEntity;
use blog_api::infra::{Fixtures, Persistence, TransactionContext, TxFuture, UnitOfWork};
use blog_api::services::{ArticleManager, ArticleService, ServiceContainer};

fn assert_violation(result: AppResult<impl std::fmt::Debug>, message: &str, field: &str) {
    match result {
        Err(AppError::ValidationFailed {
            message: actual_message,
            field: actual_field,
        }) => {
            assert_eq!(actual_message, message);
            assert_eq!(actual_field, field);
        }
        other => panic!("expected validation failure on {}, got {:?}", field, other),
    }
}

#[tokio::test]
async fn created_entities_read_back_unchanged() {
    let (_db, services) = support::services(AuthorCascade::Always).await;

    let category = support::category(&services, "Databases").await;
    let author = support::author(&services, "Edgar").await;
    let article = support::article(&services, "Normal forms", Some(category.id), Some(author.id)).await;
    let comment = support::comment(&services, article.id, "Third one is my favourite").await;

    assert_eq!(article.name, "Normal forms");
    assert_eq!(article.category, Some(category.id));
    assert_eq!(article.author, Some(author.id));

    assert_eq!(services.categories().get(category.id).await.unwrap(), category);
    assert_eq!(services.authors().get(author.id).await.unwrap(), author);
    assert_eq!(services.articles().get(article.id).await.unwrap(), article);
    assert_eq!(services.comments().get(comment.id).await.unwrap(), comment);
}

#[tokio::test]
async fn list_returns_entities_in_store_order() {
    let (_db, services) = support::services(AuthorCascade::Always).await;

    let a = support::category(&services, "A").await;
    let b = support::category(&services, "B").await;
    let c = support::category(&services, "C").await;

    assert_eq!(services.categories().list().await.unwrap(), vec![a, b, c]);
}

#[tokio::test]
async fn missing_required_field_is_rejected_without_writing() {
    let (_db, services) = support::services(AuthorCascade::Always).await;

    let result = services
        .articles()
        .create(ArticlePayload {
            description: Some("No name".to_string()),
            ..Default::default()
        })
        .await;
    assert_violation(result, "This value should not be null.", "name");

    let result = services
        .authors()
        .create(AuthorPayload {
            firstname: Some(String::new()),
            lastname: None,
        })
        .await;
    // Declared order: firstname before lastname
    assert_violation(result, "This value should not be blank.", "firstname");

    let result = services
        .comments()
        .create(CommentPayload {
            content: Some("Orphan".to_string()),
            article: None,
        })
        .await;
    assert_violation(result, "This value should not be null.", "article");

    assert!(services.articles().list().await.unwrap().is_empty());
    assert!(services.authors().list().await.unwrap().is_empty());
    assert!(services.comments().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_references_are_rejected() {
    let (_db, services) = support::services(AuthorCascade::Always).await;

    let result = services
        .articles()
        .create(ArticlePayload {
            name: Some("Dangling".to_string()),
            description: Some("Points nowhere".to_string()),
            category: Some(Some(42)),
            author: None,
        })
        .await;
    assert_violation(result, "Category 42 does not exist", "category");

    let result = services
        .articles()
        .create(ArticlePayload {
            name: Some("Dangling".to_string()),
            description: Some("Points nowhere".to_string()),
            category: None,
            author: Some(Some(7)),
        })
        .await;
    assert_violation(result, "Author 7 does not exist", "author");

    let result = services
        .comments()
        .create(CommentPayload {
            content: Some("Hello?".to_string()),
            article: Some(3),
        })
        .await;
    assert_violation(result, "Article 3 does not exist", "article");

    assert!(services.articles().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_merges_only_present_fields() {
    let (_db, services) = support::services(AuthorCascade::Always).await;

    let category = support::category(&services, "Web").await;
    let author = support::author(&services, "Tim").await;
    let article = support::article(&services, "HTTP", Some(category.id), Some(author.id)).await;

    let renamed = services
        .articles()
        .update(
            article.id,
            ArticlePayload {
                name: Some("HTTP/2".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(renamed.name, "HTTP/2");
    assert_eq!(renamed.description, article.description);
    assert_eq!(renamed.category, Some(category.id));
    assert_eq!(renamed.author, Some(author.id));

    let detached = services
        .articles()
        .update(
            article.id,
            ArticlePayload {
                category: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(detached.category, None);
    assert_eq!(detached.name, "HTTP/2");
    assert_eq!(services.articles().get(article.id).await.unwrap(), detached);
}

#[tokio::test]
async fn invalid_update_leaves_entity_unchanged() {
    let (_db, services) = support::services(AuthorCascade::Always).await;

    let category = support::category(&services, "Stable").await;

    let result = services
        .categories()
        .update(
            category.id,
            CategoryPayload {
                name: Some(String::new()),
            },
        )
        .await;
    assert_violation(result, "This value should not be blank.", "name");

    let article = support::article(&services, "Pinned", None, None).await;
    let result = services
        .articles()
        .update(
            article.id,
            ArticlePayload {
                category: Some(Some(999)),
                ..Default::default()
            },
        )
        .await;
    assert_violation(result, "Category 999 does not exist", "category");

    assert_eq!(services.categories().get(category.id).await.unwrap(), category);
    assert_eq!(services.articles().get(article.id).await.unwrap(), article);
}

#[tokio::test]
async fn article_with_removed_author_can_still_be_updated() {
    let (_db, services) = support::services(AuthorCascade::Always).await;

    let author = support::author(&services, "Departed").await;
    let article = support::article(&services, "Legacy", None, Some(author.id)).await;
    services.authors().delete(author.id).await.unwrap();

    let renamed = services
        .articles()
        .update(
            article.id,
            ArticlePayload {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(renamed.name, "Renamed");
    assert_eq!(renamed.author, Some(author.id));

    // Assigning an unknown author is still rejected
    let result = services
        .articles()
        .update(
            article.id,
            ArticlePayload {
                author: Some(Some(author.id + 100)),
                ..Default::default()
            },
        )
        .await;
    assert_violation(
        result,
        &format!("Author {} does not exist", author.id + 100),
        "author",
    );
}

#[tokio::test]
async fn update_of_missing_id_is_not_found_for_every_kind() {
    let (_db, services) = support::services(AuthorCascade::Always).await;

    assert!(matches!(
        services.articles().update(404, ArticlePayload::default()).await,
        Err(AppError::NotFound("Article"))
    ));
    assert!(matches!(
        services.authors().update(404, AuthorPayload::default()).await,
        Err(AppError::NotFound("Author"))
    ));
    assert!(matches!(
        services.categories().update(404, CategoryPayload::default()).await,
        Err(AppError::NotFound("Category"))
    ));
    assert!(matches!(
        services.comments().update(404, CommentPayload::default()).await,
        Err(AppError::NotFound("Comment"))
    ));
}

#[tokio::test]
async fn comment_can_move_to_another_article() {
    let (_db, services) = support::services(AuthorCascade::Always).await;

    let first = support::article(&services, "First", None, None).await;
    let second = support::article(&services, "Second", None, None).await;
    let comment = support::comment(&services, first.id, "Moving").await;

    let moved = services
        .comments()
        .update(
            comment.id,
            CommentPayload {
                content: None,
                article: Some(second.id),
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.article, second.id);
    assert_eq!(moved.content, "Moving");
}

/// Unit of work that refuses to open a transaction.
struct UnreachableStore;

#[async_trait]
impl UnitOfWork for UnreachableStore {
    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        Err(AppError::internal("store should not be reached"))
    }
}

#[tokio::test]
async fn validation_runs_before_the_store_is_touched() {
    let manager = ArticleManager::new(
        Arc::new(UnreachableStore),
        Arc::new(FieldOrderGate),
        AuthorCascade::Always,
    );

    let result = manager.create(ArticlePayload::default()).await;
    assert_violation(result, "This value should not be null.", "name");

    let result = manager
        .create(ArticlePayload {
            name: Some("Valid".to_string()),
            description: Some("Valid".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::Internal(_))));
}

#[tokio::test]
async fn fixtures_load_once_per_admin() {
    let db = support::database().await;
    let uow = Persistence::new(db.get_connection());
    let seed = SeedConfig::new("admin@blog.test", "correct horse battery");

    let report = Fixtures::from_config(&seed).unwrap().load(&uow).await.unwrap();
    assert_eq!(report.categories, FIXTURE_COUNT);
    assert_eq!(report.authors, FIXTURE_COUNT);
    assert_eq!(report.articles, FIXTURE_COUNT);
    assert_eq!(report.comments, FIXTURE_COUNT);
    assert!(report.admin_created);

    let again = Fixtures::from_config(&seed).unwrap().load(&uow).await.unwrap();
    assert!(!again.admin_created);

    let users = UserEntity::find().all(&db.get_connection()).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "admin@blog.test");
    assert_eq!(users[0].roles, json!(["ROLE_ADMIN"]));
    assert!(users[0].password.starts_with("$argon2"));

    let services = blog_api::services::Services::from_connection(
        db.get_connection(),
        &support::config(AuthorCascade::Always),
    );
    let articles = services.articles().list().await.unwrap();
    assert_eq!(articles.len(), FIXTURE_COUNT * 2);
    assert!(articles.iter().all(|a| a.category.is_some() && a.author.is_some()));
    assert_eq!(articles[0].name, "Article0");
}
