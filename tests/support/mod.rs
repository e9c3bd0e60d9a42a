//! Shared setup for integration tests: an in-memory SQLite store with
//! migrations applied.

#![allow(dead_code)]

use sea_orm::ConnectOptions;

use blog_api::config::Config;
use blog_api::domain::{
    Article, ArticlePayload, Author, AuthorCascade, AuthorPayload, Category, CategoryPayload,
    Comment, CommentPayload,
};
use blog_api::infra::Database;
use blog_api::services::{ServiceContainer, Services};

/// Fresh in-memory database. A single pooled connection keeps the
/// schema alive for the whole test.
pub async fn database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect_with(options)
        .await
        .expect("in-memory database should migrate")
}

pub fn config(cascade: AuthorCascade) -> Config {
    Config {
        author_cascade: cascade,
        ..Config::default()
    }
}

pub async fn services(cascade: AuthorCascade) -> (Database, Services) {
    let db = database().await;
    let services = Services::from_connection(db.get_connection(), &config(cascade));
    (db, services)
}

pub async fn category(services: &Services, name: &str) -> Category {
    services
        .categories()
        .create(CategoryPayload {
            name: Some(name.to_string()),
        })
        .await
        .expect("category should be created")
}

pub async fn author(services: &Services, firstname: &str) -> Author {
    services
        .authors()
        .create(AuthorPayload {
            firstname: Some(firstname.to_string()),
            lastname: Some("Tester".to_string()),
        })
        .await
        .expect("author should be created")
}

pub async fn article(
    services: &Services,
    name: &str,
    category: Option<i32>,
    author: Option<i32>,
) -> Article {
    services
        .articles()
        .create(ArticlePayload {
            name: Some(name.to_string()),
            description: Some(format!("About {}", name)),
            category: Some(category),
            author: Some(author),
        })
        .await
        .expect("article should be created")
}

pub async fn comment(services: &Services, article: i32, content: &str) -> Comment {
    services
        .comments()
        .create(CommentPayload {
            content: Some(content.to_string()),
            article: Some(article),
        })
        .await
        .expect("comment should be created")
}
