use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard},
        model::user::UpdateUserParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Update the authenticated user's profile.
///
/// Only the fields present in the body change. A new password is hashed before storage.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - New email or username already taken
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Email or username already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    token: AccessToken,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let updated = UserService::new(&state.db, state.bcrypt_cost)
        .update(&user, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete an account and everything it owns.
///
/// # Access Control
/// - The account owner, or an admin
///
/// # Returns
/// - `200 OK` - Account deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No such account
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    token: AccessToken,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    UserService::new(&state.db, state.bcrypt_cost)
        .delete(&actor, user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}
