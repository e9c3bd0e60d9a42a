//! Application services layer - Use cases and business logic.
//!
//! Each service runs one request in one Unit of Work transaction.
//! Delete cascades live in `integrity`.

mod article_service;
mod author_service;
mod category_service;
mod comment_service;
pub mod container;
pub mod integrity;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use article_service::{ArticleManager, ArticleService};
pub use author_service::{AuthorManager, AuthorService};
pub use category_service::{CategoryManager, CategoryService};
pub use comment_service::{CommentManager, CommentService};
pub use integrity::{ArticleRemoval, CategoryRemoval};

#[cfg(any(test, feature = "test-utils"))]
pub use article_service::MockArticleService;
#[cfg(any(test, feature = "test-utils"))]
pub use author_service::MockAuthorService;
#[cfg(any(test, feature = "test-utils"))]
pub use category_service::MockCategoryService;
#[cfg(any(test, feature = "test-utils"))]
pub use comment_service::MockCommentService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
