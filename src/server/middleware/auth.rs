//! Access token extraction, permission guards and the protected-URL gate.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, Extensions, HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;
use tower_cookies::Cookies;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::cookie::ACCESS_TOKEN_COOKIE,
    model::user::User,
    service::auth::{jwt::JwtService, AuthService},
    state::AppState,
};

pub enum Permission {
    Admin,
}

/// Access token presented with a request, if any.
///
/// Taken from `Authorization: Bearer <token>` first, then from the `access_token` cookie.
/// Extraction never fails; a missing token is reported by [`AuthGuard`].
#[derive(Debug, Clone, Default)]
pub struct AccessToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for AccessToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(access_token(&parts.headers, &parts.extensions)))
    }
}

fn access_token(headers: &HeaderMap, extensions: &Extensions) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(JwtService::extract_from_header);
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    extensions
        .get::<Cookies>()
        .and_then(|cookies| cookies.get(ACCESS_TOKEN_COOKIE))
        .map(|cookie| cookie.value().to_string())
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    token: &'a AccessToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, token: &'a AccessToken) -> Self {
        Self { db, jwt, token }
    }

    /// Resolves the request's user and checks the given permissions.
    ///
    /// An empty permission list only requires authentication.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding every permission
    /// - `Err(AuthError::MissingToken)` - No token presented
    /// - `Err(AuthError::InvalidToken | UserNotFound)` - Token rejected
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = self.token.0.as_deref() else {
            return Err(AuthError::MissingToken.into());
        };

        let user = AuthService::new(self.db, self.jwt)
            .current_user(token)
            .await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            "Admin privileges required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Rejects catalog and image writes carrying a token that does not decode.
///
/// Requests without a token pass through so the handler's guard can answer them.
pub async fn protected_gate(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_protected(req.method(), req.uri().path()) {
        if let Some(token) = access_token(req.headers(), req.extensions()) {
            state.jwt.decode_access(&token)?;
        }
    }

    Ok(next.run(req).await)
}

/// Whether `method` on `path` is an admin or upload write on the catalog.
pub fn is_protected(method: &Method, path: &str) -> bool {
    let Some(rest) = path.strip_prefix("/api/") else {
        return false;
    };
    let segments: Vec<&str> = rest.trim_end_matches('/').split('/').collect();

    match segments.as_slice() {
        ["products"] | ["categories"] | ["images"] => method == Method::POST,
        ["products", _] => method == Method::PUT || method == Method::DELETE,
        ["categories", id] => *id != "slug" && method == Method::DELETE,
        ["categories", _, "products"] => method == Method::POST,
        ["categories", _, "products", _] => method == Method::DELETE,
        _ => false,
    }
}
