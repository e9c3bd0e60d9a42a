//! Seed command - Loads development fixtures.

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Fixtures, Persistence};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    if args.fresh {
        tracing::warn!("Resetting database before seeding...");
        db.fresh_migrations().await?;
    } else {
        db.run_migrations().await?;
    }

    let fixtures = Fixtures::from_config(&config.seed)?;
    let report = fixtures.load(&Persistence::new(db.get_connection())).await?;

    println!(
        "Seeded {} categories, {} authors, {} articles, {} comments{}",
        report.categories,
        report.authors,
        report.articles,
        report.comments,
        if report.admin_created {
            format!(", admin {}", config.seed.admin_email)
        } else {
            String::new()
        }
    );

    Ok(())
}
