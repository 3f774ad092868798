/**
 * Server Configuration
 *
 * This module loads configuration from the environment and builds the
 * database connection pool.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - required, PostgreSQL connection string
 * - `JWT_SECRET` - required, shared token-signing secret
 * - `SERVER_PORT` - optional, defaults to 3000
 *
 * The server has no degraded mode: missing required variables fail
 * startup with a `ConfigError` instead of disabling features.
 */

use sqlx::PgPool;
use thiserror::Error;

/// Default listen port when SERVER_PORT is unset or unparsable
const DEFAULT_PORT: u16 = 3000;

/// Configuration loading and database setup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// The database connection pool could not be created
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    /// Embedded migrations failed to apply
    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Shared token-signing secret
    pub jwt_secret: String,
    /// TCP port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` when `DATABASE_URL` or
    /// `JWT_SECRET` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;
        let port = parse_port(std::env::var("SERVER_PORT").ok());

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}

/// Parse the listen port, falling back to the default
fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Create the database connection pool and apply migrations
///
/// The pool is created once at startup and injected into handlers
/// through the application state; nothing constructs per-request
/// connections.
///
/// # Errors
///
/// Fails when the pool cannot connect or migrations cannot be applied.
pub async fn connect_database(database_url: &str) -> Result<PgPool, ConfigError> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_default() {
        assert_eq!(parse_port(None), 3000);
    }

    #[test]
    fn test_parse_port_value() {
        assert_eq!(parse_port(Some("8080".to_string())), 8080);
    }

    #[test]
    fn test_parse_port_garbage_falls_back() {
        assert_eq!(parse_port(Some("not-a-port".to_string())), 3000);
    }
}
