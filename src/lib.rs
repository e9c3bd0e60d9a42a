//! Blog API - CRUD over articles, authors, categories and comments
//!
//! Deleting an article removes its comments and its author; deleting a
//! category detaches its articles. Every request runs in one database
//! transaction.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, payloads and the validation gate
//! - **services**: Use cases and delete cascades
//! - **infra**: Database, entities, migrations, fixtures, unit of work
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Load fixtures into a fresh schema
//! cargo run -- seed --fresh
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Article, Author, AuthorCascade, Category, Comment};
pub use errors::{AppError, AppResult};
