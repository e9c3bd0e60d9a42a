//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{article_handler, author_handler, category_handler, comment_handler};
use crate::domain::{
    Article, ArticlePayload, Author, AuthorPayload, Category, CategoryPayload, Comment,
    CommentPayload,
};

/// OpenAPI documentation for the blog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "0.1.0",
        description = "CRUD for articles, authors, categories and comments"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        article_handler::list_articles,
        article_handler::create_article,
        article_handler::get_article,
        article_handler::update_article,
        article_handler::delete_article,
        author_handler::list_authors,
        author_handler::create_author,
        author_handler::get_author,
        author_handler::update_author,
        author_handler::delete_author,
        category_handler::list_categories,
        category_handler::create_category,
        category_handler::get_category,
        category_handler::update_category,
        category_handler::delete_category,
        comment_handler::list_comments,
        comment_handler::create_comment,
        comment_handler::get_comment,
        comment_handler::update_comment,
        comment_handler::delete_comment,
    ),
    components(
        schemas(
            Article,
            ArticlePayload,
            Author,
            AuthorPayload,
            Category,
            CategoryPayload,
            Comment,
            CommentPayload,
        )
    ),
    tags(
        (name = "Articles", description = "Articles; deleting one removes its comments and author"),
        (name = "Authors", description = "Article authors"),
        (name = "Categories", description = "Categories; deleting one detaches its articles"),
        (name = "Comments", description = "Comments on articles")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resource_path_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/articles",
            "/api/article/{id}",
            "/api/authors",
            "/api/author/{id}",
            "/api/categories",
            "/api/category/{id}",
            "/api/comments",
            "/api/comment/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
