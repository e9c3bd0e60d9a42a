//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    ArticleService, AuthorService, CategoryService, CommentService, ServiceContainer, Services,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<dyn ArticleService>,
    pub author_service: Arc<dyn AuthorService>,
    pub category_service: Arc<dyn CategoryService>,
    pub comment_service: Arc<dyn CommentService>,
    /// Used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Build the concrete services on top of `database`.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::new(&container, database)
    }

    /// Take services from any container (a mock one in router tests).
    pub fn new(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            article_service: container.articles(),
            author_service: container.authors(),
            category_service: container.categories(),
            comment_service: container.comments(),
            database,
        }
    }
}
