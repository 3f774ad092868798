//! Blog Module
//!
//! Blog posts: data model, database operations, and the protected
//! create/update/fetch/list endpoints.
//!
//! # Module Structure
//!
//! ```text
//! blog/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Post model and database operations
//! ├── types.rs    - Request/response types
//! └── handlers.rs - Blog endpoint handlers
//! ```
//!
//! All routes in this module are gated by the auth middleware; the
//! create handler reads the authenticated author from request
//! extensions via the `AuthUser` extractor.

/// Post model and database operations
pub mod db;

/// Request and response types
pub mod types;

/// HTTP handlers for blog endpoints
pub mod handlers;

// Re-export commonly used items
pub use db::Post;
pub use handlers::{create_post, get_post, list_posts, update_post};
