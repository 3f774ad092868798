/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the route groups into a single Axum router.
 *
 * # Route Groups
 *
 * 1. **User routes** (`/api/v1/user`) - public signup/signin
 * 2. **Blog routes** (`/api/v1/blog`) - protected by the auth middleware
 *
 * Request tracing is applied across the whole router; the auth
 * middleware is applied inside the blog group only.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::blog_routes::configure_blog_routes;
use crate::routes::user_routes::configure_user_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the pool and token secret
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .merge(configure_user_routes())
        .merge(configure_blog_routes(app_state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
