//! Comment service.

use async_trait::async_trait;
use sea_orm::Set;
use std::sync::Arc;

use super::integrity;
use crate::config::{KIND_ARTICLE, KIND_COMMENT};
use crate::domain::{Comment, CommentDraft, CommentPayload, ValidationGate};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::entities::{article, comment};
use crate::infra::{TransactionContext, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Comment>>;

    async fn get(&self, id: i32) -> AppResult<Comment>;

    /// The referenced article must exist
    async fn create(&self, payload: CommentPayload) -> AppResult<Comment>;

    async fn update(&self, id: i32, payload: CommentPayload) -> AppResult<Comment>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct CommentManager<U: UnitOfWork> {
    uow: Arc<U>,
    gate: Arc<dyn ValidationGate>,
}

impl<U: UnitOfWork> CommentManager<U> {
    pub fn new(uow: Arc<U>, gate: Arc<dyn ValidationGate>) -> Self {
        Self { uow, gate }
    }
}

async fn check_references(ctx: &TransactionContext<'_>, draft: &CommentDraft) -> AppResult<()> {
    if let Some(article_id) = draft.article {
        if !ctx.exists::<article::Entity>(article_id).await? {
            return Err(AppError::validation(
                format!("{} {} does not exist", KIND_ARTICLE, article_id),
                "article",
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> CommentService for CommentManager<U> {
    async fn list(&self) -> AppResult<Vec<Comment>> {
        let models = self
            .uow
            .transaction(|ctx| Box::pin(async move { ctx.find_all::<comment::Entity>().await }))
            .await?;

        Ok(models.into_iter().map(Comment::from).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Comment> {
        self.uow
            .transaction(|ctx| Box::pin(async move { ctx.find::<comment::Entity>(id).await }))
            .await?
            .map(Comment::from)
            .ok_or_not_found(KIND_COMMENT)
    }

    async fn create(&self, payload: CommentPayload) -> AppResult<Comment> {
        let draft = CommentDraft::from(payload);
        self.gate.check(&draft).into_result()?;

        let model = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move {
                    check_references(&ctx, &draft).await?;
                    ctx.insert(comment::ActiveModel::from(draft)).await
                })
            })
            .await?;

        tracing::info!(comment_id = model.id, article_id = model.article_id, "Comment created");
        Ok(Comment::from(model))
    }

    async fn update(&self, id: i32, payload: CommentPayload) -> AppResult<Comment> {
        let gate = self.gate.clone();

        let model = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move {
                    let existing = ctx
                        .find::<comment::Entity>(id)
                        .await?
                        .ok_or_not_found(KIND_COMMENT)?;

                    let mut draft = CommentDraft::from(Comment::from(existing));
                    draft.apply(payload);
                    gate.check(&draft).into_result()?;
                    check_references(&ctx, &draft).await?;

                    let mut active = comment::ActiveModel::from(draft);
                    active.id = Set(id);
                    ctx.update(active).await
                })
            })
            .await?;

        tracing::info!(comment_id = id, "Comment updated");
        Ok(Comment::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.uow
            .transaction(|ctx| Box::pin(async move { integrity::delete_comment(&ctx, id).await }))
            .await?;

        tracing::info!(comment_id = id, "Comment deleted");
        Ok(())
    }
}
