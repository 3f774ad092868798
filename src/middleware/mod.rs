//! Middleware Module
//!
//! HTTP middleware for request processing. Currently provides:
//!
//! - **`auth`** - Bearer-token authentication for the blog route group

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
