/**
 * Bearer Token Management
 *
 * This module handles JWT creation and validation for logged-in users.
 * Tokens are stateless: the signed claims carry the username, the avatar
 * reference, and the issued/expiry timestamps. The signing secret and the
 * expiry window come from `Config` rather than being read from the
 * environment at call time.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated user
    pub username: String,
    /// Avatar reference carried for the admin UI
    #[serde(default)]
    pub user_img: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: u64,
    /// Issued at time (Unix timestamp, seconds)
    pub iat: u64,
}

/// Create a signed token for a user
///
/// # Arguments
/// * `username` - authenticated username
/// * `user_img` - avatar reference
/// * `secret` - signing secret from `Config`
/// * `expire_secs` - token lifetime in seconds from `Config`
pub fn create_token(
    username: &str,
    user_img: &str,
    secret: &str,
    expire_secs: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs();

    let claims = Claims {
        username: username.to_string(),
        user_img: user_img.to_string(),
        exp: now + expire_secs,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token
///
/// Expired or tampered tokens fail validation.
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
    fn test_create_and_verify_token() {
        let token = create_token("alice", "avatar.png", SECRET, 3600).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.user_img, "avatar.png");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expiry_window_from_config_value() {
        let token = create_token("alice", "", SECRET, 120).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.exp - claims.iat, 120);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token("alice", "", SECRET, 3600).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify_token("invalid.token.here", SECRET).is_err());
    }
}
