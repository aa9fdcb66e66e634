use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, TokenDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AccessToken, AuthGuard},
            cookie::AuthCookies,
        },
        model::user::SignupParams,
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// The first account registered while no admin exists becomes the admin.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Passwords differ, or email/username already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db, state.bcrypt_cost);

    let user = service.signup(SignupParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with a username and password form.
///
/// Sets the `access_token` and `refresh_token` cookies and returns both tokens.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `401 Unauthorized` - Incorrect username or password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body(content = LoginDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Incorrect username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(payload): Form<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let user = service
        .authenticate(&payload.username, &payload.password)
        .await?;
    let tokens = service.issue_tokens(&user)?;

    AuthCookies::new(&cookies).set_tokens(&tokens, state.jwt.refresh_ttl_seconds());

    tracing::debug!("User {} logged in", user.user_id);

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Exchange the `refresh_token` cookie for a new access token.
///
/// # Returns
/// - `200 OK` - New access token, also set as the `access_token` cookie
/// - `401 Unauthorized` - Refresh cookie missing or invalid
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Access token renewed", body = TokenDto),
        (status = 401, description = "Missing or invalid refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let auth_cookies = AuthCookies::new(&cookies);

    let Some(refresh_token) = auth_cookies.refresh_token() else {
        return Err(AuthError::MissingToken.into());
    };

    let tokens = AuthService::new(&state.db, &state.jwt)
        .refresh(&refresh_token)
        .await?;

    auth_cookies.set_access(&tokens.access_token, tokens.expires_in);

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Log out by removing both token cookies.
///
/// # Returns
/// - `200 OK` - Cookies removed
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - One of the token cookies is missing
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Token not found", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    token: AccessToken,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let auth_cookies = AuthCookies::new(&cookies);
    if auth_cookies.access_token().is_none() || auth_cookies.refresh_token().is_none() {
        return Err(AppError::NotFound("Token not found".to_string()));
    }

    auth_cookies.clear();

    Ok((StatusCode::OK, Json(MessageDto::new("Successfully logged out!"))))
}

/// Get the currently authenticated user.
///
/// # Returns
/// - `200 OK` - The user behind the presented token
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    token: AccessToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
