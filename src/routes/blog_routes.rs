/**
 * Blog Route Configuration
 *
 * Protected blog endpoints. The auth middleware is layered onto this
 * group only; every route here requires a valid bearer token.
 *
 * # Routes
 *
 * - `POST /api/v1/blog` - Create a post
 * - `PUT /api/v1/blog` - Update a post
 * - `GET /api/v1/blog/bulk` - List all posts
 * - `GET /api/v1/blog/{id}` - Fetch a post by id
 *
 * `/bulk` is registered as a literal segment, so it wins over the
 * `/{id}` capture.
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::blog::handlers::{create_post, get_post, list_posts, update_post};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Build the protected blog route group
///
/// # Arguments
///
/// * `app_state` - Shared state, needed here to construct the auth
///   middleware layer
pub fn configure_blog_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/blog", post(create_post).put(update_post))
        .route("/api/v1/blog/bulk", get(list_posts))
        .route("/api/v1/blog/{id}", get(get_post))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
}
