use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login form, submitted as `application/x-www-form-urlencoded`.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TokenDto {
    pub access_token: String,
    /// Only present on login; refreshing issues a new access token alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
}
