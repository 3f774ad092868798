/**
 * Server Initialization
 *
 * This module assembles the Axum application: it builds the connection
 * pool from configuration, constructs the shared state, and wires the
 * router.
 *
 * # Initialization Process
 *
 * 1. Connect the database pool and apply migrations
 * 2. Create `AppState` with the pool and token secret
 * 3. Create the router with all routes and middleware
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::{connect_database, ConfigError, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Loaded server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails when the database pool cannot be created or migrations fail;
/// the server does not start without its store.
pub async fn create_app(config: &ServerConfig) -> Result<Router, ConfigError> {
    tracing::info!("Initializing blog backend");

    let db_pool = connect_database(&config.database_url).await?;

    let app_state = AppState {
        db_pool,
        jwt_secret: config.jwt_secret.clone(),
    };

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
