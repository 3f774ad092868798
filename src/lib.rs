//! Inkpost - Multi-tenant Blogging Backend
//!
//! Inkpost is a minimal blogging backend: user signup/signin with JWT
//! authentication, and create/update/fetch/list operations on blog posts
//! scoped to an authenticated author. It is an Axum HTTP server over a
//! PostgreSQL store accessed through a long-lived sqlx connection pool.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs       - Module exports
//! ├── main.rs      - Server entry point
//! ├── server/      - Configuration, state, app assembly
//! ├── routes/      - Route configuration
//! ├── auth/        - JWT issuance and verification
//! ├── users/       - User model and signup/signin handlers
//! ├── blog/        - Post model and blog handlers
//! ├── middleware/  - Bearer-token auth middleware
//! └── error/       - Error taxonomy and HTTP conversion
//! ```
//!
//! # Request Flow
//!
//! Router → (auth middleware, blog group only) → handler → store/token
//! service → JSON response. No shared mutable state exists between
//! requests beyond the connection pool.

/// JWT issuance and verification
pub mod auth;

/// Post model and blog endpoint handlers
pub mod blog;

/// Backend error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// User model and authentication endpoint handlers
pub mod users;

// Re-export commonly used types
pub use error::ApiError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
