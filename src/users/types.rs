/**
 * User Handler Types
 *
 * Request and response types shared by the signup and signin handlers.
 */

use serde::{Deserialize, Serialize};

/// Signup request body
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Signin request body
#[derive(Deserialize, Serialize, Debug)]
pub struct SigninRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Token response
///
/// Returned by both signup and signin on success.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed JWT for the authenticated user
    pub jwt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_wire_shape() {
        let response = TokenResponse {
            jwt: "abc.def.ghi".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"jwt": "abc.def.ghi"}));
    }

    #[test]
    fn test_signup_request_deserializes() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"email":"a@x.com","password":"p"}"#).unwrap();
        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.password, "p");
    }
}
