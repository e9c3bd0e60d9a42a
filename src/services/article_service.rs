//! Article service - CRUD plus the article delete cascade.

use async_trait::async_trait;
use sea_orm::Set;
use std::sync::Arc;

use super::integrity;
use crate::config::{KIND_ARTICLE, KIND_AUTHOR, KIND_CATEGORY};
use crate::domain::{Article, ArticleDraft, ArticlePayload, AuthorCascade, ValidationGate};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::entities::{article, author, category};
use crate::infra::{TransactionContext, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Article service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// All articles in store order
    async fn list(&self) -> AppResult<Vec<Article>>;

    async fn get(&self, id: i32) -> AppResult<Article>;

    /// Validate, check references, insert
    async fn create(&self, payload: ArticlePayload) -> AppResult<Article>;

    /// Merge the present payload fields into the stored article, then
    /// validate and write it back
    async fn update(&self, id: i32, payload: ArticlePayload) -> AppResult<Article>;

    /// Remove the article, its comments and (per policy) its author
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ArticleService using Unit of Work.
pub struct ArticleManager<U: UnitOfWork> {
    uow: Arc<U>,
    gate: Arc<dyn ValidationGate>,
    cascade: AuthorCascade,
}

impl<U: UnitOfWork> ArticleManager<U> {
    pub fn new(uow: Arc<U>, gate: Arc<dyn ValidationGate>, cascade: AuthorCascade) -> Self {
        Self { uow, gate, cascade }
    }
}

/// Referenced category must exist.
async fn check_category(ctx: &TransactionContext<'_>, draft: &ArticleDraft) -> AppResult<()> {
    if let Some(category_id) = draft.category {
        if !ctx.exists::<category::Entity>(category_id).await? {
            return Err(AppError::validation(
                format!("{} {} does not exist", KIND_CATEGORY, category_id),
                "category",
            ));
        }
    }
    Ok(())
}

/// Referenced author must exist.
async fn check_author(ctx: &TransactionContext<'_>, draft: &ArticleDraft) -> AppResult<()> {
    if let Some(author_id) = draft.author {
        if !ctx.exists::<author::Entity>(author_id).await? {
            return Err(AppError::validation(
                format!("{} {} does not exist", KIND_AUTHOR, author_id),
                "author",
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> ArticleService for ArticleManager<U> {
    async fn list(&self) -> AppResult<Vec<Article>> {
        let models = self
            .uow
            .transaction(|ctx| Box::pin(async move { ctx.find_all::<article::Entity>().await }))
            .await?;

        Ok(models.into_iter().map(Article::from).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Article> {
        self.uow
            .transaction(|ctx| Box::pin(async move { ctx.find::<article::Entity>(id).await }))
            .await?
            .map(Article::from)
            .ok_or_not_found(KIND_ARTICLE)
    }

    async fn create(&self, payload: ArticlePayload) -> AppResult<Article> {
        let draft = ArticleDraft::from(payload);
        self.gate.check(&draft).into_result()?;

        let model = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move {
                    check_category(&ctx, &draft).await?;
                    check_author(&ctx, &draft).await?;
                    ctx.insert(article::ActiveModel::from(draft)).await
                })
            })
            .await?;

        tracing::info!(article_id = model.id, "Article created");
        Ok(Article::from(model))
    }

    async fn update(&self, id: i32, payload: ArticlePayload) -> AppResult<Article> {
        let gate = self.gate.clone();
        // A kept author may already be gone; only a newly assigned one is checked
        let author_assigned = matches!(payload.author, Some(Some(_)));

        let model = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move {
                    let existing = ctx
                        .find::<article::Entity>(id)
                        .await?
                        .ok_or_not_found(KIND_ARTICLE)?;

                    let mut draft = ArticleDraft::from(Article::from(existing));
                    draft.apply(payload);
                    gate.check(&draft).into_result()?;
                    check_category(&ctx, &draft).await?;
                    if author_assigned {
                        check_author(&ctx, &draft).await?;
                    }

                    let mut active = article::ActiveModel::from(draft);
                    active.id = Set(id);
                    ctx.update(active).await
                })
            })
            .await?;

        tracing::info!(article_id = id, "Article updated");
        Ok(Article::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let cascade = self.cascade;

        let removal = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move { integrity::delete_article(&ctx, id, cascade).await })
            })
            .await?;

        tracing::info!(
            article_id = id,
            comments = removal.comments,
            author = ?removal.author,
            shared_author = removal.shared_author,
            "Article deleted"
        );
        Ok(())
    }
}
