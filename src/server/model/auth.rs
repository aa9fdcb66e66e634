//! Token types produced by authentication.

use crate::model::auth::TokenDto;

/// Freshly issued tokens. `refresh_token` is absent when only the access token was renewed.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: "bearer".to_string(),
            expires_in: self.expires_in,
        }
    }
}
