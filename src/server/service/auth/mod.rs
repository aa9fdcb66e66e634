//! Authentication service.
//!
//! Verifies credentials, issues token pairs and resolves tokens back into users. Token
//! transport (header, cookies) is handled by the middleware layer; this service only sees
//! raw token strings.

pub mod jwt;
pub mod password;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{auth::TokenPair, user::User},
    service::auth::{jwt::JwtService, password::verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService) -> Self {
        Self { db, jwt }
    }

    /// Checks a username and password pair.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the response does
    /// not reveal which usernames exist.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Issues an access and refresh token for `user`.
    pub fn issue_tokens(&self, user: &User) -> Result<TokenPair, InternalError> {
        Ok(TokenPair {
            access_token: self.jwt.encode_access(&user.username)?,
            refresh_token: Some(self.jwt.encode_refresh(user.user_id)?),
            expires_in: self.jwt.access_ttl_seconds(),
        })
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - New access token, no refresh token
    /// - `Err(AuthError::InvalidToken)` - Refresh token failed validation
    /// - `Err(AuthError::UserNotFound)` - Token names a deleted user
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.jwt.decode_refresh(refresh_token)?;

        let user = UserRepository::new(self.db)
            .find_by_id(claims.id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(claims.id.to_string()))?;

        Ok(TokenPair {
            access_token: self.jwt.encode_access(&user.username)?,
            refresh_token: None,
            expires_in: self.jwt.access_ttl_seconds(),
        })
    }

    /// Resolves an access token into the user it was issued to.
    ///
    /// # Returns
    /// - `Ok(User)` - Token is valid and its user exists
    /// - `Err(AuthError::InvalidToken)` - Undecodable or expired token
    /// - `Err(AuthError::UserNotFound)` - No user with the token's username
    pub async fn current_user(&self, access_token: &str) -> Result<User, AppError> {
        let claims = self.jwt.decode_access(access_token)?;

        let user = UserRepository::new(self.db)
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound(claims.sub))?;

        Ok(user)
    }
}

