/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP API. Every handler
 * and the auth middleware return `ApiError`, which maps onto the wire
 * contract's status codes and JSON bodies.
 *
 * # Error Categories
 *
 * - `Unauthorized` - Missing/malformed auth header, invalid token, or
 *   failed signin (403)
 * - `Validation` - Missing required body fields (400)
 * - `Conflict` - Duplicate email on signup (409)
 * - `NotFound` - No matching row for an update or fetch (404)
 * - `Fetch` - Store failure surfaced on the fetch-by-id path (500)
 * - `Database` / `Token` / `Hash` - Unexpected infrastructure failures (500)
 *
 * # Body Shape
 *
 * The wire contract uses two body shapes: auth and validation failures are
 * reported under an `error` key, while not-found and fetch failures are
 * reported under a `message` key. `body()` encodes that distinction.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned by API handlers and middleware
///
/// Each variant carries enough context to produce the HTTP response the
/// wire contract specifies. Infrastructure failures wrap their source
/// errors and collapse to an opaque 500 body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failure (missing header, bad token, bad credentials)
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Message returned under the `error` key
        message: String,
    },

    /// Request body failed validation
    #[error("validation failed: {message}")]
    Validation {
        /// Message returned under the `error` key
        message: String,
    },

    /// Uniqueness conflict (duplicate email on signup)
    #[error("conflict: {message}")]
    Conflict {
        /// Message returned under the `error` key
        message: String,
    },

    /// No matching row
    #[error("not found: {message}")]
    NotFound {
        /// Message returned under the `message` key
        message: String,
    },

    /// Store failure on the fetch-by-id path
    ///
    /// This path reports store failures with its own 500 body instead of
    /// the generic internal error.
    #[error("fetch failed: {message}")]
    Fetch {
        /// Message returned under the `message` key
        message: String,
    },

    /// Unexpected database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token issuance failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ApiError {
    /// Create an authentication error (403)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a fetch error (500, `message` body key)
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::FORBIDDEN,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(_) | Self::Token(_) | Self::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Build the JSON response body for this error
    ///
    /// Auth, validation, and conflict failures use the `error` key;
    /// not-found and fetch failures use the `message` key. Infrastructure
    /// failures never leak their source and report a fixed body.
    pub fn body(&self) -> serde_json::Value {
        match self {
            Self::Unauthorized { message }
            | Self::Validation { message }
            | Self::Conflict { message } => serde_json::json!({ "error": message }),
            Self::NotFound { message } | Self::Fetch { message } => {
                serde_json::json!({ "message": message })
            }
            Self::Database(_) | Self::Token(_) | Self::Hash(_) => {
                serde_json::json!({ "error": "internal server error" })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unauthorized_is_403_with_error_key() {
        let err = ApiError::unauthorized("user not found");
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.body(), serde_json::json!({"error": "user not found"}));
    }

    #[test]
    fn test_validation_is_400_with_error_key() {
        let err = ApiError::validation("Title and content are required.");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body(),
            serde_json::json!({"error": "Title and content are required."})
        );
    }

    #[test]
    fn test_conflict_is_409() {
        let err = ApiError::conflict("email already registered");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_is_404_with_message_key() {
        let err = ApiError::not_found("Blog post not found.");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.body(),
            serde_json::json!({"message": "Blog post not found."})
        );
    }

    #[test]
    fn test_fetch_is_500_with_message_key() {
        let err = ApiError::fetch("Error while fetching blog post.");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.body(),
            serde_json::json!({"message": "Error while fetching blog post."})
        );
    }

    #[test]
    fn test_database_error_is_opaque_500() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.body(),
            serde_json::json!({"error": "internal server error"})
        );
    }
}
