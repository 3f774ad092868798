/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding the long-lived
 * database connection pool and the token-signing secret. It is created
 * once at startup and cloned into every handler; `PgPool` is internally
 * reference-counted, so clones are cheap.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers that only touch the store
 * extract `State<PgPool>` directly instead of the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup
    pub db_pool: PgPool,

    /// Shared secret for token issuance and verification
    pub jwt_secret: String,
}

/// Allow handlers to extract the pool directly
///
/// ```rust,no_run
/// use axum::extract::State;
/// use sqlx::PgPool;
///
/// async fn handler(State(pool): State<PgPool>) {
///     // query the store
/// }
/// ```
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
