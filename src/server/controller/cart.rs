use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        cart::{AddToCartDto, CartDto, CartItemDto, UpdateCartDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard},
        model::cart::AddToCartParams,
        service::cart::CartService,
        state::AppState,
    },
};

/// Tag for grouping cart endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

/// List the authenticated user's cart with product details.
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Cart lines with their products", body = Vec<CartItemDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    token: AccessToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let items = CartService::new(&state.db).list(user.user_id).await?;

    let dtos: Vec<CartItemDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a product to the cart.
///
/// Adding a product already in the cart in the same size increases that line's quantity.
///
/// # Returns
/// - `201 Created` - The new or grown cart line
/// - `400 Bad Request` - Quantity below 1
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Product not found
#[utoipa::path(
    post,
    path = "/api/cart",
    tag = CART_TAG,
    request_body = AddToCartDto,
    responses(
        (status = 201, description = "Cart line stored", body = CartDto),
        (status = 400, description = "Invalid quantity", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    token: AccessToken,
    Json(payload): Json<AddToCartDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db)
        .add(user.user_id, AddToCartParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(cart.into_dto())))
}

/// Increment or decrement a cart line by one.
///
/// Decrementing a line holding a single unit removes it.
///
/// # Returns
/// - `200 OK` - Updated line, or a message when the line was removed
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No such line in the caller's cart
#[utoipa::path(
    put,
    path = "/api/cart/{cart_id}",
    tag = CART_TAG,
    params(
        ("cart_id" = i32, Path, description = "Cart line ID")
    ),
    request_body = UpdateCartDto,
    responses(
        (status = 200, description = "Updated cart line, or removal message", body = CartDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Cart line not found", body = ErrorDto)
    ),
)]
pub async fn update_cart(
    State(state): State<AppState>,
    token: AccessToken,
    Path(cart_id): Path<i32>,
    Json(payload): Json<UpdateCartDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db)
        .update(user.user_id, cart_id, payload.action)
        .await?;

    let response = match cart {
        Some(cart) => (StatusCode::OK, Json(cart.into_dto())).into_response(),
        None => (
            StatusCode::OK,
            Json(MessageDto::new("Item removed from cart")),
        )
            .into_response(),
    };

    Ok(response)
}

#[utoipa::path(
    delete,
    path = "/api/cart/{cart_id}",
    tag = CART_TAG,
    params(
        ("cart_id" = i32, Path, description = "Cart line ID")
    ),
    responses(
        (status = 200, description = "Cart line removed", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Cart line not found", body = ErrorDto)
    ),
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    token: AccessToken,
    Path(cart_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    CartService::new(&state.db)
        .delete(user.user_id, cart_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Item removed from cart"))))
}
