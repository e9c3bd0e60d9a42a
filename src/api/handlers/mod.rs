//! HTTP request handlers.

pub mod article_handler;
pub mod author_handler;
pub mod category_handler;
pub mod comment_handler;

pub use article_handler::article_routes;
pub use author_handler::author_routes;
pub use category_handler::category_routes;
pub use comment_handler::comment_routes;
