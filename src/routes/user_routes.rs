/**
 * User Route Configuration
 *
 * Public authentication endpoints. Neither route is gated by the auth
 * middleware: signup and signin are how callers obtain a token in the
 * first place.
 *
 * # Routes
 *
 * - `POST /api/v1/user/signup` - User registration
 * - `POST /api/v1/user/signin` - User authentication
 */

use axum::{routing::post, Router};

use crate::server::state::AppState;
use crate::users::handlers::{signin, signup};

/// Build the public user route group
pub fn configure_user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/user/signup", post(signup))
        .route("/api/v1/user/signin", post(signin))
}
