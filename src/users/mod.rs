//! Users Module
//!
//! User accounts: data model, database operations, and the public
//! signup/signin endpoints.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - User model and database operations
//! ├── types.rs    - Request/response types
//! └── handlers.rs - Signup and signin handlers
//! ```

/// User model and database operations
pub mod db;

/// Request and response types
pub mod types;

/// HTTP handlers for user endpoints
pub mod handlers;

// Re-export commonly used items
pub use db::User;
pub use handlers::{signin, signup};
pub use types::{SigninRequest, SignupRequest, TokenResponse};
