/**
 * Token Service
 *
 * This module handles JWT issuance and verification. Tokens carry the
 * authenticated user's id as the subject claim and are signed with the
 * shared secret from configuration (HS256).
 *
 * The secret is always passed in explicitly so that issuance and
 * verification are pure functions of their inputs.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: 30 days
const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (stringified UUID)
    pub id: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Issue a signed token for a user
///
/// # Arguments
/// * `user_id` - The user the token authenticates
/// * `secret` - Shared signing secret
///
/// # Returns
/// Signed JWT string embedding the `id` claim
pub fn issue_token(user_id: Uuid, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        id: user_id.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token
///
/// Fails when the signature is invalid, the token is malformed or expired,
/// or the secret mismatches.
///
/// # Arguments
/// * `token` - JWT string presented by the caller
/// * `secret` - Shared signing secret
///
/// # Returns
/// Decoded claims containing the user id
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_token() {
        let user_id = Uuid::new_v4();
        let result = issue_token(user_id, SECRET);
        assert!(result.is_ok());
        assert!(!result.unwrap().is_empty());
    }

    #[test]
    fn test_verify_token_round_trip() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, SECRET).unwrap();

        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.id, user_id.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issue_token(Uuid::new_v4(), SECRET).unwrap();
        let result = verify_token(&token, "some-other-secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let result = verify_token("invalid.token.here", SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let claims = Claims {
            id: Uuid::new_v4().to_string(),
            exp: unix_now() - 3600,
            iat: unix_now() - 7200,
        };
        let key = EncodingKey::from_secret(SECRET.as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let result = verify_token(&token, SECRET);
        assert!(result.is_err());
    }
}
