//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SEED_ADMIN_EMAIL, DEFAULT_SEED_ADMIN_PASSWORD,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use crate::domain::AuthorCascade;

/// Credentials for the administrator created by the `seed` command.
#[derive(Clone)]
pub struct SeedConfig {
    pub admin_email: String,
    admin_password: String,
}

impl SeedConfig {
    pub fn new(admin_email: impl Into<String>, admin_password: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
            admin_password: admin_password.into(),
        }
    }

    /// Plain-text admin password; hashed before it reaches the store.
    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("admin_email", &self.admin_email)
            .field("admin_password", &"[REDACTED]")
            .finish()
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// What happens to an article's author when the article is deleted
    pub author_cascade: AuthorCascade,
    pub seed: SeedConfig,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("author_cascade", &self.author_cascade)
            .field("seed", &self.seed)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            author_cascade: AuthorCascade::default(),
            seed: SeedConfig::new(DEFAULT_SEED_ADMIN_EMAIL, DEFAULT_SEED_ADMIN_PASSWORD),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let author_cascade = match env::var("AUTHOR_CASCADE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to '{}'", e, AuthorCascade::default());
                AuthorCascade::default()
            }),
            Err(_) => AuthorCascade::default(),
        };

        let admin_password = env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::debug!("SEED_ADMIN_PASSWORD not set, using development default");
            DEFAULT_SEED_ADMIN_PASSWORD.to_string()
        });

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            author_cascade,
            seed: SeedConfig::new(
                env::var("SEED_ADMIN_EMAIL")
                    .unwrap_or_else(|_| DEFAULT_SEED_ADMIN_EMAIL.to_string()),
                admin_password,
            ),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.author_cascade, AuthorCascade::Always);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::default();
        let printed = format!("{:?}", config);
        assert!(printed.contains("[REDACTED]"));
        assert!(!printed.contains(DEFAULT_DATABASE_URL));
        assert!(!printed.contains(DEFAULT_SEED_ADMIN_PASSWORD));
    }
}
