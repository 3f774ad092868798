/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting the blog route group.
 * It extracts and verifies JWT tokens from the Authorization header and
 * provides the authenticated user's id to downstream handlers.
 *
 * # Rejection Bodies
 *
 * All rejections are 403 with a JSON body:
 * - Missing or malformed header:
 *   `{"error": "Unauthorized: Missing or malformed authorization header"}`
 * - Token failed verification: `{"error": "Invalid or expired token"}`
 * - Verified token with an unusable id claim: `{"error": "Unauthorized"}`
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from a verified token
///
/// Stored in request extensions by the middleware; request-scoped.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Extract the token from an `Authorization: Bearer <token>` header value
///
/// Returns `None` when the value does not carry the `Bearer` scheme.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the Authorization header
/// 2. Verifies the token against the configured secret
/// 3. Parses the user id from the token claims
/// 4. Attaches `AuthenticatedUser` to request extensions
///
/// Rejects with 403 and the wire contract's error bodies when any step
/// fails. Never touches the database.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = auth_header.and_then(extract_bearer_token).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::unauthorized("Unauthorized: Missing or malformed authorization header")
    })?;

    let claims = verify_token(token, &app_state.jwt_secret).map_err(|e| {
        tracing::warn!("Token verification failed: {:?}", e);
        ApiError::unauthorized("Invalid or expired token")
    })?;

    let user_id = Uuid::parse_str(&claims.id).map_err(|e| {
        tracing::warn!("Unusable id claim in verified token: {:?}", e);
        ApiError::unauthorized("Unauthorized")
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Use as a handler parameter on protected routes to get the
/// `AuthenticatedUser` the middleware stored in request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthorized("Unauthorized")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(
            extract_bearer_token("Bearer abc.def.ghi"),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_extract_bearer_token_wrong_scheme() {
        assert_eq!(extract_bearer_token("Token abc.def.ghi"), None);
        assert_eq!(extract_bearer_token("bearer abc.def.ghi"), None);
    }

    #[test]
    fn test_extract_bearer_token_bare_value() {
        assert_eq!(extract_bearer_token("abc.def.ghi"), None);
        assert_eq!(extract_bearer_token(""), None);
    }

    #[tokio::test]
    async fn test_authenticated_user_in_extensions() {
        let mut request = Request::builder()
            .uri("http://example.com")
            .body(axum::body::Body::empty())
            .unwrap();

        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
        };
        request.extensions_mut().insert(user.clone());

        let extracted = request.extensions().get::<AuthenticatedUser>().cloned();
        assert_eq!(extracted.unwrap().user_id, user.user_id);
    }
}
