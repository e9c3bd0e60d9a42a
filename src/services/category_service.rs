//! Category service - CRUD plus detaching articles on delete.

use async_trait::async_trait;
use sea_orm::Set;
use std::sync::Arc;

use super::integrity;
use crate::config::KIND_CATEGORY;
use crate::domain::{Category, CategoryDraft, CategoryPayload, ValidationGate};
use crate::errors::{AppResult, OptionExt};
use crate::infra::entities::category;
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Category service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Category>>;

    async fn get(&self, id: i32) -> AppResult<Category>;

    async fn create(&self, payload: CategoryPayload) -> AppResult<Category>;

    async fn update(&self, id: i32, payload: CategoryPayload) -> AppResult<Category>;

    /// Null the category on every article using it, then remove it
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct CategoryManager<U: UnitOfWork> {
    uow: Arc<U>,
    gate: Arc<dyn ValidationGate>,
}

impl<U: UnitOfWork> CategoryManager<U> {
    pub fn new(uow: Arc<U>, gate: Arc<dyn ValidationGate>) -> Self {
        Self { uow, gate }
    }
}

#[async_trait]
impl<U: UnitOfWork> CategoryService for CategoryManager<U> {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let models = self
            .uow
            .transaction(|ctx| Box::pin(async move { ctx.find_all::<category::Entity>().await }))
            .await?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Category> {
        self.uow
            .transaction(|ctx| Box::pin(async move { ctx.find::<category::Entity>(id).await }))
            .await?
            .map(Category::from)
            .ok_or_not_found(KIND_CATEGORY)
    }

    async fn create(&self, payload: CategoryPayload) -> AppResult<Category> {
        let draft = CategoryDraft::from(payload);
        self.gate.check(&draft).into_result()?;

        let model = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move { ctx.insert(category::ActiveModel::from(draft)).await })
            })
            .await?;

        tracing::info!(category_id = model.id, "Category created");
        Ok(Category::from(model))
    }

    async fn update(&self, id: i32, payload: CategoryPayload) -> AppResult<Category> {
        let gate = self.gate.clone();

        let model = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move {
                    let existing = ctx
                        .find::<category::Entity>(id)
                        .await?
                        .ok_or_not_found(KIND_CATEGORY)?;

                    let mut draft = CategoryDraft::from(Category::from(existing));
                    draft.apply(payload);
                    gate.check(&draft).into_result()?;

                    let mut active = category::ActiveModel::from(draft);
                    active.id = Set(id);
                    ctx.update(active).await
                })
            })
            .await?;

        tracing::info!(category_id = id, "Category updated");
        Ok(Category::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let removal = self
            .uow
            .transaction(|ctx| Box::pin(async move { integrity::delete_category(&ctx, id).await }))
            .await?;

        tracing::info!(
            category_id = id,
            detached_articles = removal.detached_articles,
            "Category deleted"
        );
        Ok(())
    }
}
