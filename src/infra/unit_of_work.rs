//! Unit of Work pattern implementation.
//!
//! Every service operation, reads included, runs inside one
//! transaction. The context hands out entity-generic reads and writes
//! bound to that transaction, so a cascade either lands completely or
//! not at all.

use async_trait::async_trait;
use sea_orm::{
    sea_query::IntoCondition, ActiveModelBehavior, ActiveModelTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn,
    PrimaryKeyTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::future::Future;
use std::pin::Pin;

use crate::errors::{AppError, AppResult};

/// Boxed body of a transaction.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic method; mock at the
/// service level or use an in-memory store.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Run `f` in a transaction. Commits on `Ok`, rolls back on `Err`.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Store access scoped to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Look up a row by integer id.
    pub async fn find<E>(&self, id: i32) -> AppResult<Option<E::Model>>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        E::find_by_id(id).one(self.txn).await.map_err(AppError::from)
    }

    /// All rows, ordered by primary key.
    pub async fn find_all<E>(&self) -> AppResult<Vec<E::Model>>
    where
        E: EntityTrait,
    {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        query.all(self.txn).await.map_err(AppError::from)
    }

    /// Rows matching `filter`.
    pub async fn find_by<E, C>(&self, filter: C) -> AppResult<Vec<E::Model>>
    where
        E: EntityTrait,
        C: IntoCondition,
    {
        E::find()
            .filter(filter)
            .all(self.txn)
            .await
            .map_err(AppError::from)
    }

    pub async fn exists<E>(&self, id: i32) -> AppResult<bool>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        Ok(self.find::<E>(id).await?.is_some())
    }

    /// Insert a new row; the store assigns the id.
    pub async fn insert<A>(&self, model: A) -> AppResult<<A::Entity as EntityTrait>::Model>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        model.insert(self.txn).await.map_err(AppError::from)
    }

    /// Write back a row whose primary key is set.
    pub async fn update<A>(&self, model: A) -> AppResult<<A::Entity as EntityTrait>::Model>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        model.update(self.txn).await.map_err(AppError::from)
    }

    /// Delete by id, returning the number of removed rows.
    pub async fn remove<E>(&self, id: i32) -> AppResult<u64>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        let result = E::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;
        Ok(result.rows_affected)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
