/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for `ApiError`,
 * allowing handlers and middleware to return errors directly.
 *
 * # Response Format
 *
 * The response status and JSON body come from `ApiError::status_code()`
 * and `ApiError::body()`. Infrastructure failures are logged here, at the
 * single point where they leave the application.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", self);
        }

        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_response_status() {
        let response = ApiError::unauthorized("Unauthorized").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_response_status() {
        let response = ApiError::not_found("Blog not found.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
