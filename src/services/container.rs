//! Service Container - Centralized service access.
//!
//! Handlers reach every service through this trait, so router tests can
//! swap in mocks.

use std::sync::Arc;

use super::{
    ArticleManager, ArticleService, AuthorManager, AuthorService, CategoryManager,
    CategoryService, CommentManager, CommentService,
};
use crate::config::Config;
use crate::domain::{FieldOrderGate, ValidationGate};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn articles(&self) -> Arc<dyn ArticleService>;

    fn authors(&self) -> Arc<dyn AuthorService>;

    fn categories(&self) -> Arc<dyn CategoryService>;

    fn comments(&self) -> Arc<dyn CommentService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    article_service: Arc<dyn ArticleService>,
    author_service: Arc<dyn AuthorService>,
    category_service: Arc<dyn CategoryService>,
    comment_service: Arc<dyn CommentService>,
}

impl Services {
    pub fn new(
        article_service: Arc<dyn ArticleService>,
        author_service: Arc<dyn AuthorService>,
        category_service: Arc<dyn CategoryService>,
        comment_service: Arc<dyn CommentService>,
    ) -> Self {
        Self {
            article_service,
            author_service,
            category_service,
            comment_service,
        }
    }

    /// Wire every service to one `Persistence` and the default gate.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let gate: Arc<dyn ValidationGate> = Arc::new(FieldOrderGate);

        Self {
            article_service: Arc::new(ArticleManager::new(
                uow.clone(),
                gate.clone(),
                config.author_cascade,
            )),
            author_service: Arc::new(AuthorManager::new(uow.clone(), gate.clone())),
            category_service: Arc::new(CategoryManager::new(uow.clone(), gate.clone())),
            comment_service: Arc::new(CommentManager::new(uow, gate)),
        }
    }
}

impl ServiceContainer for Services {
    fn articles(&self) -> Arc<dyn ArticleService> {
        self.article_service.clone()
    }

    fn authors(&self) -> Arc<dyn AuthorService> {
        self.author_service.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }

    fn comments(&self) -> Arc<dyn CommentService> {
        self.comment_service.clone()
    }
}
