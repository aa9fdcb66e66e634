use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::{AddressDto, CreateOrderDto, OrderDto, OrderItemDto, PaymentDto, UpdateOrderDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard},
        model::order::{CreateOrderParams, OrderUpdateOutcome},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order from the authenticated user's cart.
///
/// Moves every cart line into the order and stores the delivery address and payment
/// method. The cart is empty afterwards.
///
/// # Returns
/// - `201 Created` - Order placed
/// - `400 Bad Request` - Cart is empty, or the requested order id is taken
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Empty cart or duplicate order id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    token: AccessToken,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let order = OrderService::new(&state.db)
        .create(&user, CreateOrderParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// List the authenticated user's orders, newest first.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "The caller's orders", body = Vec<OrderDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    token: AccessToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let orders = OrderService::new(&state.db).list(user.user_id).await?;

    let dtos: Vec<OrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let order = OrderService::new(&state.db)
        .get(user.user_id, order_id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Change an order's status.
///
/// Setting `cancelled` or `delivered` closes the order: it is removed together with its
/// items, address and payment, and a confirmation message is returned instead.
///
/// # Returns
/// - `200 OK` - Updated order, or "Order is cancelled" / "Order is delivered"
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Order not found
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Updated order, or closing message", body = OrderDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<i32>,
    Json(payload): Json<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let outcome = OrderService::new(&state.db)
        .update(user.user_id, order_id, payload.order_status)
        .await?;

    let response = match outcome {
        OrderUpdateOutcome::Updated(order) => {
            (StatusCode::OK, Json(order.into_dto())).into_response()
        }
        OrderUpdateOutcome::Closed(status) => (
            StatusCode::OK,
            Json(MessageDto::new(OrderUpdateOutcome::closed_message(status))),
        )
            .into_response(),
    };

    Ok(response)
}

/// Delete an order together with its items, address and payment.
#[utoipa::path(
    delete,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    OrderService::new(&state.db)
        .delete(user.user_id, order_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("order deleted"))))
}

#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/items",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order items with products", body = Vec<OrderItemDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn get_order_items(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let items = OrderService::new(&state.db)
        .items(user.user_id, order_id)
        .await?;

    let dtos: Vec<OrderItemDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{order_id}/items",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order items deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order or items not found", body = ErrorDto)
    ),
)]
pub async fn delete_order_items(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    OrderService::new(&state.db)
        .delete_items(user.user_id, order_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Order item deleted!"))))
}

#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/address",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Delivery address", body = AddressDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order or address not found", body = ErrorDto)
    ),
)]
pub async fn get_order_address(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let address = OrderService::new(&state.db)
        .get_address(user.user_id, order_id)
        .await?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{order_id}/address",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Address deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order or address not found", body = ErrorDto)
    ),
)]
pub async fn delete_order_address(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    OrderService::new(&state.db)
        .delete_address(user.user_id, order_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Address Deleted!"))))
}

#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/payment",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Payment details", body = PaymentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order or payment not found", body = ErrorDto)
    ),
)]
pub async fn get_order_payment(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let payment = OrderService::new(&state.db)
        .get_payment(user.user_id, order_id)
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{order_id}/payment",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Payment deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order or payment not found", body = ErrorDto)
    ),
)]
pub async fn delete_order_payment(
    State(state): State<AppState>,
    token: AccessToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    OrderService::new(&state.db)
        .delete_payment(user.user_id, order_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Payment Deleted!"))))
}
