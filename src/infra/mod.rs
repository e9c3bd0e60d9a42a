//! Infrastructure layer - storage integration
//!
//! - Database connection, migrations and fixtures
//! - SeaORM entities
//! - Unit of Work for transaction management

pub mod db;
pub mod entities;
pub mod unit_of_work;

pub use db::{Database, FixtureReport, Fixtures, Migrator};
pub use unit_of_work::{Persistence, TransactionContext, TxFuture, UnitOfWork};
