//! Cascade rules for deletes.
//!
//! Each function runs inside the caller's transaction: the existence
//! check fails before anything is staged, and every removal or
//! nullification lands in the same commit.

use sea_orm::{ColumnTrait, Condition, Set};

use crate::config::{KIND_ARTICLE, KIND_AUTHOR, KIND_CATEGORY, KIND_COMMENT};
use crate::domain::AuthorCascade;
use crate::errors::{AppResult, OptionExt};
use crate::infra::entities::{article, author, category, comment};
use crate::infra::TransactionContext;

/// What deleting an article took with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleRemoval {
    pub comments: usize,
    /// Id of the removed author, if one was removed
    pub author: Option<i32>,
    /// The author was still referenced by other articles
    pub shared_author: bool,
}

/// What deleting a category touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRemoval {
    /// Articles whose category was set to null
    pub detached_articles: usize,
}

/// Remove an article with its comments and, per `policy`, its author.
pub async fn delete_article(
    ctx: &TransactionContext<'_>,
    id: i32,
    policy: AuthorCascade,
) -> AppResult<ArticleRemoval> {
    let found = ctx
        .find::<article::Entity>(id)
        .await?
        .ok_or_not_found(KIND_ARTICLE)?;

    let comments = ctx
        .find_by::<comment::Entity, _>(comment::Column::ArticleId.eq(id))
        .await?;

    let shared_author = match found.author_id {
        Some(author_id) => !ctx
            .find_by::<article::Entity, _>(
                Condition::all()
                    .add(article::Column::AuthorId.eq(author_id))
                    .add(article::Column::Id.ne(id)),
            )
            .await?
            .is_empty(),
        None => false,
    };

    // Comments first: comments.article_id is a foreign key
    for c in &comments {
        ctx.remove::<comment::Entity>(c.id).await?;
    }
    ctx.remove::<article::Entity>(id).await?;

    let mut removal = ArticleRemoval {
        comments: comments.len(),
        author: None,
        shared_author,
    };

    if let Some(author_id) = found.author_id {
        if shared_author {
            tracing::warn!(
                article_id = id,
                author_id,
                policy = %policy,
                "Author of deleted article is referenced by other articles"
            );
        }

        let cascade = match policy {
            AuthorCascade::Always => true,
            AuthorCascade::Unshared => !shared_author,
        };

        // The author may already be gone; articles can dangle
        if cascade && ctx.remove::<author::Entity>(author_id).await? > 0 {
            removal.author = Some(author_id);
        }
    }

    Ok(removal)
}

/// Detach every article from the category, then remove it.
pub async fn delete_category(ctx: &TransactionContext<'_>, id: i32) -> AppResult<CategoryRemoval> {
    ctx.find::<category::Entity>(id)
        .await?
        .ok_or_not_found(KIND_CATEGORY)?;

    let articles = ctx
        .find_by::<article::Entity, _>(article::Column::CategoryId.eq(id))
        .await?;

    let detached_articles = articles.len();
    for model in articles {
        let mut active: article::ActiveModel = model.into();
        active.category_id = Set(None);
        ctx.update(active).await?;
    }

    ctx.remove::<category::Entity>(id).await?;

    Ok(CategoryRemoval { detached_articles })
}

/// Remove an author. Articles keep their (now dangling) reference.
pub async fn delete_author(ctx: &TransactionContext<'_>, id: i32) -> AppResult<()> {
    ctx.find::<author::Entity>(id)
        .await?
        .ok_or_not_found(KIND_AUTHOR)?;
    ctx.remove::<author::Entity>(id).await?;
    Ok(())
}

pub async fn delete_comment(ctx: &TransactionContext<'_>, id: i32) -> AppResult<()> {
    ctx.find::<comment::Entity>(id)
        .await?
        .ok_or_not_found(KIND_COMMENT)?;
    ctx.remove::<comment::Entity>(id).await?;
    Ok(())
}
