use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No access token in the `Authorization` header or the `access_token` cookie.
    #[error("Request carries no access token")]
    MissingToken,

    /// Token failed to decode, carried the wrong claims, or has expired.
    #[error("Token rejected: {0}")]
    InvalidToken(String),

    /// Login with an unknown username or a wrong password.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Token was valid but names a user that no longer exists.
    #[error("Token references missing user {0}")]
    UserNotFound(String),

    /// Authenticated user lacks the permission for the operation.
    ///
    /// # Fields
    /// - Message returned to the client
    #[error("Access denied: {0}")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every authentication failure answers 401 with a `WWW-Authenticate: Bearer` header so
/// clients know to present a token; permission failures answer 403. Details are logged at
/// debug level while the client sees a fixed message.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid or orphaned token and bad credentials
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::AccessDenied(message) => {
                return (StatusCode::FORBIDDEN, Json(ErrorDto { error: message })).into_response();
            }
            Self::MissingToken => "Not authenticated",
            Self::InvalidCredentials => "Incorrect username or password",
            Self::InvalidToken(_) | Self::UserNotFound(_) => "Could not validate credentials",
        };

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
