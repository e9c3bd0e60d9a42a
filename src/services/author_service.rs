//! Author service.

use async_trait::async_trait;
use sea_orm::Set;
use std::sync::Arc;

use super::integrity;
use crate::config::KIND_AUTHOR;
use crate::domain::{Author, AuthorDraft, AuthorPayload, ValidationGate};
use crate::errors::{AppResult, OptionExt};
use crate::infra::entities::author;
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Author service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthorService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Author>>;

    async fn get(&self, id: i32) -> AppResult<Author>;

    async fn create(&self, payload: AuthorPayload) -> AppResult<Author>;

    async fn update(&self, id: i32, payload: AuthorPayload) -> AppResult<Author>;

    /// Remove the author only; referencing articles are left as they are
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct AuthorManager<U: UnitOfWork> {
    uow: Arc<U>,
    gate: Arc<dyn ValidationGate>,
}

impl<U: UnitOfWork> AuthorManager<U> {
    pub fn new(uow: Arc<U>, gate: Arc<dyn ValidationGate>) -> Self {
        Self { uow, gate }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthorService for AuthorManager<U> {
    async fn list(&self) -> AppResult<Vec<Author>> {
        let models = self
            .uow
            .transaction(|ctx| Box::pin(async move { ctx.find_all::<author::Entity>().await }))
            .await?;

        Ok(models.into_iter().map(Author::from).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Author> {
        self.uow
            .transaction(|ctx| Box::pin(async move { ctx.find::<author::Entity>(id).await }))
            .await?
            .map(Author::from)
            .ok_or_not_found(KIND_AUTHOR)
    }

    async fn create(&self, payload: AuthorPayload) -> AppResult<Author> {
        let draft = AuthorDraft::from(payload);
        self.gate.check(&draft).into_result()?;

        let model = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move { ctx.insert(author::ActiveModel::from(draft)).await })
            })
            .await?;

        tracing::info!(author_id = model.id, "Author created");
        Ok(Author::from(model))
    }

    async fn update(&self, id: i32, payload: AuthorPayload) -> AppResult<Author> {
        let gate = self.gate.clone();

        let model = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move {
                    let existing = ctx
                        .find::<author::Entity>(id)
                        .await?
                        .ok_or_not_found(KIND_AUTHOR)?;

                    let mut draft = AuthorDraft::from(Author::from(existing));
                    draft.apply(payload);
                    gate.check(&draft).into_result()?;

                    let mut active = author::ActiveModel::from(draft);
                    active.id = Set(id);
                    ctx.update(active).await
                })
            })
            .await?;

        tracing::info!(author_id = id, "Author updated");
        Ok(Author::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.uow
            .transaction(|ctx| Box::pin(async move { integrity::delete_author(&ctx, id).await }))
            .await?;

        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }
}
