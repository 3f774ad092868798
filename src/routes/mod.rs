//! Route Configuration Module
//!
//! HTTP route configuration for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports
//! ├── router.rs      - Main router creation
//! ├── user_routes.rs - Public signup/signin routes
//! └── blog_routes.rs - Protected blog routes
//! ```
//!
//! # Route Organization
//!
//! - `POST /api/v1/user/signup` - User registration (public)
//! - `POST /api/v1/user/signin` - User authentication (public)
//! - `POST /api/v1/blog` - Create post (bearer token)
//! - `PUT /api/v1/blog` - Update post (bearer token)
//! - `GET /api/v1/blog/bulk` - List posts (bearer token)
//! - `GET /api/v1/blog/{id}` - Fetch post (bearer token)

/// Main router creation
pub mod router;

/// Public user route handlers
pub mod user_routes;

/// Protected blog route handlers
pub mod blog_routes;

// Re-export commonly used functions
pub use router::create_router;
