//! Error Module
//!
//! This module defines the API error taxonomy and its conversion to HTTP
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError definition and status/body mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! All handlers return `Result<_, ApiError>`; the `IntoResponse`
//! implementation turns each variant into the status code and JSON body
//! the wire contract specifies.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
