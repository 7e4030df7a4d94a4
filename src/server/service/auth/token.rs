//! HS256 access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// JWT payload. `sub` holds the user id as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: i32, expires_in: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }
}

/// Issues and validates access tokens. Cheap to clone.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: Duration,
}

impl TokenService {
    pub fn new(secret: &str, expire_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in: Duration::minutes(expire_minutes),
        }
    }

    /// Signs a token for the user valid for the configured lifetime.
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        self.encode(&Claims::new(user_id, self.expires_in))
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        let token = encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(InternalError::TokenEncoding)?;

        Ok(token)
    }

    /// Validates signature and expiry, then resolves the user id from `sub`.
    ///
    /// # Returns
    /// - `Ok(i32)` - User id the token was issued for
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired
    /// - `Err(AuthError::InvalidTokenPayload)` - `sub` is not numeric
    pub fn user_id(&self, token: &str) -> Result<i32, AppError> {
        let data = decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(AuthError::InvalidToken)?;

        let sub = data.claims.sub;
        sub.parse::<i32>()
            .map_err(|_| AuthError::InvalidTokenPayload(sub).into())
    }
}
