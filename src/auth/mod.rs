//! Authentication Module
//!
//! JWT issuance and verification for stateless authentication.
//!
//! # Authentication Flow
//!
//! 1. **Signup**: user created → token issued for the new id
//! 2. **Signin**: credentials verified → token issued
//! 3. **Protected request**: token presented → verified by the auth
//!    middleware → user id injected into the request
//!
//! Tokens embed the user id, expire after 30 days, and are never persisted
//! or revoked server-side.

/// JWT issuance and verification
pub mod tokens;

// Re-export commonly used items
pub use tokens::{issue_token, verify_token, Claims};
