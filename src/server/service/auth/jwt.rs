//! JWT signing and validation for access and refresh tokens.
//!
//! Access tokens identify a user by username (`sub`), refresh tokens by numeric id (`id`).
//! Each kind decodes into its own claims struct with no optional fields, so a token of one
//! kind fails to decode where the other is expected.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    config::Config,
    error::{auth::AuthError, internal::InternalError},
};

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Username of the token owner.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Claims carried by a refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshClaims {
    /// Id of the token owner.
    pub id: i32,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and validates tokens with the configured secret and algorithm.
///
/// Cloned into every request through `AppState`; the keys are shared behind an `Arc`.
#[derive(Clone)]
pub struct JwtService {
    keys: Arc<JwtKeys>,
    algorithm: Algorithm,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtService {
    pub fn new(config: &Config) -> Self {
        let secret = config.secret_key.as_bytes();

        Self {
            keys: Arc::new(JwtKeys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            algorithm: config.algorithm,
            access_ttl: Duration::minutes(config.access_token_expire_minutes),
            refresh_ttl: Duration::minutes(config.refresh_token_expire_minutes),
        }
    }

    /// Lifetime of an access token in seconds, used for `expires_in` and cookie max-age.
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    /// Lifetime of a refresh token in seconds.
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl.num_seconds()
    }

    pub fn encode_access(&self, username: &str) -> Result<String, InternalError> {
        let claims = AccessClaims {
            sub: username.to_string(),
            exp: (Utc::now() + self.access_ttl).timestamp(),
        };
        self.encode(&claims)
    }

    pub fn encode_refresh(&self, user_id: i32) -> Result<String, InternalError> {
        let claims = RefreshClaims {
            id: user_id,
            exp: (Utc::now() + self.refresh_ttl).timestamp(),
        };
        self.encode(&claims)
    }

    /// Validates signature and expiry of an access token.
    ///
    /// # Returns
    /// - `Ok(AccessClaims)` - Token is genuine and unexpired
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or not an access token
    pub fn decode_access(&self, token: &str) -> Result<AccessClaims, AuthError> {
        self.decode(token)
    }

    /// Validates signature and expiry of a refresh token.
    ///
    /// # Returns
    /// - `Ok(RefreshClaims)` - Token is genuine and unexpired
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or not a refresh token
    pub fn decode_refresh(&self, token: &str) -> Result<RefreshClaims, AuthError> {
        self.decode(token)
    }

    /// Pulls the token out of an `Authorization: Bearer <token>` header value.
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    fn encode<T: Serialize>(&self, claims: &T) -> Result<String, InternalError> {
        encode(&Header::new(self.algorithm), claims, &self.keys.encoding)
            .map_err(InternalError::TokenEncode)
    }

    fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<T>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
