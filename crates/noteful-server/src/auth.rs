//! Authentication module: JWT token management and password hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use noteful_core::{User, UserId};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// The user embedded in a token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenUser {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// JWT claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The signed-in user.
    pub user: TokenUser,
    /// Username (subject).
    pub sub: String,
    /// Expiration time (unix timestamp).
    pub exp: usize,
    /// Issued at (unix timestamp).
    pub iat: usize,
}

/// Authenticated user extracted from JWT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    pub full_name: Option<String>,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user.id,
            username: claims.user.username,
            full_name: claims.user.full_name,
        }
    }
}

impl From<&AuthenticatedUser> for User {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.user_id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
        }
    }
}

/// Create a JWT token for a user.
pub fn create_token(user: &User, secret: &str, expiry_hours: u64) -> Result<String, ApiError> {
    let now = chrono::Utc::now();
    let exp = i64::try_from(expiry_hours)
        .ok()
        .and_then(chrono::TimeDelta::try_hours)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| {
            ApiError::Internal(format!("Token lifetime of {expiry_hours} hours is out of range"))
        })?
        .timestamp() as usize;

    let claims = Claims {
        user: TokenUser {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
        },
        sub: user.username.clone(),
        exp,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("Failed to create token: {}", e)))
}

/// Validate a JWT token and return claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        ApiError::Unauthorized("Unauthorized".to_string())
    })?;

    Ok(token_data.claims)
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ApiError::Internal(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Decode the bearer token in `headers` into the caller's identity.
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthenticatedUser, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;

    Ok(validate_token(token, secret)?.into())
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by `require_auth` on protected routers.
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(user.clone());
        }
        authenticate(&parts.headers, &state.config().jwt_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn test_user() -> User {
        User {
            id: UserId::new(),
            username: "bobuser".to_string(),
            full_name: Some("Bob User".to_string()),
        }
    }

    #[test]
    fn test_hash_and_verify_password() {
        let password = "test_password_123";
        let hash = hash_password(password).unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differ() {
        let a = hash_password("password").unwrap();
        let b = hash_password("password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_create_and_validate_token() {
        let secret = "test_secret_key_12345";
        let user = test_user();

        let token = create_token(&user, secret, 24).unwrap();
        let claims = validate_token(&token, secret).unwrap();

        assert_eq!(claims.sub, "bobuser");
        assert_eq!(claims.user.id, user.id);
        assert_eq!(claims.user.full_name.as_deref(), Some("Bob User"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_claims_use_camel_case_user() {
        let token = create_token(&test_user(), "s", 1).unwrap();
        let claims = validate_token(&token, "s").unwrap();
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["user"]["fullName"], "Bob User");
        assert_eq!(json["sub"], "bobuser");
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        let user = test_user();
        assert!(create_token(&user, "s", 3_000_000_000_000_000).is_err());
        assert!(create_token(&user, "s", u64::MAX).is_err());

        let token = create_token(&user, "s", 24 * 365 * 10).unwrap();
        assert!(validate_token(&token, "s").is_ok());
    }

    #[test]
    fn test_validate_token_wrong_secret() {
        let token = create_token(&test_user(), "secret1", 24).unwrap();
        assert!(validate_token(&token, "secret2").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let now = chrono::Utc::now().timestamp() as usize;
        let claims = Claims {
            user: TokenUser {
                id: UserId::new(),
                username: "old".to_string(),
                full_name: None,
            },
            sub: "old".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        assert!(validate_token(&token, "secret").is_err());
    }

    #[test]
    fn test_authenticate_headers() {
        let user = test_user();
        let token = create_token(&user, "secret", 1).unwrap();

        let mut headers = HeaderMap::new();
        assert!(authenticate(&headers, "secret").is_err());

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {token}")).unwrap(),
        );
        assert!(authenticate(&headers, "secret").is_err());

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        let authed = authenticate(&headers, "secret").unwrap();
        assert_eq!(authed.user_id, user.id);
        assert_eq!(User::from(&authed), user);
    }
}
