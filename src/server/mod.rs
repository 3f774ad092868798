//! Server Module
//!
//! Server-side wiring: configuration loading, shared application state,
//! and app assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration and pool setup
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - App assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig::from_env()` reads `DATABASE_URL`,
//!    `JWT_SECRET`, and the optional `SERVER_PORT`
//! 2. **Store**: `connect_database` builds the pool and applies embedded
//!    migrations
//! 3. **Router**: `create_app` wires state into the router

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
