use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ALGORITHM: &str = "HS256";
const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 30;
const DEFAULT_REFRESH_TOKEN_EXPIRE_MINUTES: i64 = 7 * 24 * 60;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub secret_key: String,
    pub algorithm: Algorithm,
    pub access_token_expire_minutes: i64,
    pub refresh_token_expire_minutes: i64,

    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let algorithm = optional_var("ALGORITHM", DEFAULT_ALGORITHM.to_string())?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: optional_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.to_string())?,
            secret_key: std::env::var("SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("SECRET_KEY".to_string()))?,
            algorithm: parse_hmac_algorithm(&algorithm)?,
            access_token_expire_minutes: optional_var(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            )?,
            refresh_token_expire_minutes: optional_var(
                "REFRESH_TOKEN_EXPIRE_MINUTES",
                DEFAULT_REFRESH_TOKEN_EXPIRE_MINUTES,
            )?,
            bcrypt_cost: optional_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for tests: in-memory database, fixed secret, cheapest bcrypt cost.
    pub fn for_test() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            secret_key: "test-secret".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expire_minutes: DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            refresh_token_expire_minutes: DEFAULT_REFRESH_TOKEN_EXPIRE_MINUTES,
            bcrypt_cost: 4,
        }
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn optional_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Tokens are signed with a shared secret, so only the HMAC family is accepted.
fn parse_hmac_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "ALGORITHM".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match Algorithm::from_str(value) {
        Ok(algorithm @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(algorithm),
        Ok(_) => Err(invalid("only HS256, HS384 and HS512 are supported")),
        Err(_) => Err(invalid("unknown algorithm")),
    }
}
