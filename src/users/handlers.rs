/**
 * User Handlers
 *
 * HTTP handlers for the public user endpoints:
 *
 * - `POST /api/v1/user/signup` - Create a user and issue a token
 * - `POST /api/v1/user/signin` - Verify credentials and issue a token
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (DEFAULT_COST) before storage
 * - Signin returns a single 403 body for unknown email and wrong password
 *   alike, so callers cannot enumerate accounts
 * - Tokens expire after 30 days
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::tokens::issue_token;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::{create_user, get_user_by_email};
use crate::users::types::{SigninRequest, SignupRequest, TokenResponse};

/// Signup handler
///
/// Creates a user row from the request body and returns a token for the
/// new user's id.
///
/// # Errors
///
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Hashing, store, or token failure
pub async fn signup(
    State(app_state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Signup request for email: {}", request.email);

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(&app_state.db_pool, &request.email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email already registered: {}", request.email);
                ApiError::conflict("email already registered")
            } else {
                ApiError::from(e)
            }
        })?;

    let token = issue_token(user.id, &app_state.jwt_secret)?;

    tracing::info!("User created: {} ({})", user.id, user.email);

    Ok(Json(TokenResponse { jwt: token }))
}

/// Signin handler
///
/// Looks up the user by email and verifies the password against the
/// stored hash. Unknown email and wrong password produce the same
/// response.
///
/// # Errors
///
/// * `403 Forbidden` - `{"error": "user not found"}` for any credential
///   mismatch
/// * `500 Internal Server Error` - Store or token failure
pub async fn signin(
    State(app_state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Signin request for email: {}", request.email);

    let user = get_user_by_email(&app_state.db_pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Signin failed, unknown email: {}", request.email);
            ApiError::unauthorized("user not found")
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Signin failed, wrong password for: {}", request.email);
        return Err(ApiError::unauthorized("user not found"));
    }

    let token = issue_token(user.id, &app_state.jwt_secret)?;

    tracing::info!("User signed in: {} ({})", user.id, user.email);

    Ok(Json(TokenResponse { jwt: token }))
}

/// Check whether a store error is a unique-constraint violation
fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => db_error.is_unique_violation(),
        _ => false,
    }
}
