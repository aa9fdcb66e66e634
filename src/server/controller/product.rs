use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard, Permission},
        model::{
            product::{CreateProductParams, UpdateProductParams},
            review::CreateReviewParams,
        },
        service::{product::ProductService, review::ReviewService},
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Create a product.
///
/// The slug is derived from the name when none is given.
///
/// # Access Control
/// - `Admin` - Only admins can create products
///
/// # Returns
/// - `201 Created` - Product created
/// - `400 Bad Request` - Product name already taken
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated, or not an admin
/// - `404 Not Found` - Referenced image missing
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Product already present", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    token: AccessToken,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Permission::Admin])
        .await?;

    let product = ProductService::new(&state.db)
        .create(CreateProductParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// List all products ordered by id.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db).get_all().await?;

    let dtos: Vec<ProductDto> = products.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/products/{product_id}",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db).get_by_id(product_id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Update a product. Absent fields are left unchanged.
///
/// # Access Control
/// - `Admin` - Only admins can update products
#[utoipa::path(
    put,
    path = "/api/products/{product_id}",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Updated product", body = ProductDto),
        (status = 400, description = "Product name already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Product or image not found", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    token: AccessToken,
    Path(product_id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Permission::Admin])
        .await?;

    let product = ProductService::new(&state.db)
        .update(product_id, UpdateProductParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Delete a product together with its category links, cart lines, order items and
/// reviews.
///
/// # Access Control
/// - `Admin` - Only admins can delete products
#[utoipa::path(
    delete,
    path = "/api/products/{product_id}",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    token: AccessToken,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Permission::Admin])
        .await?;

    ProductService::new(&state.db).delete(product_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("product deleted"))))
}

/// List a product's reviews, newest first.
#[utoipa::path(
    get,
    path = "/api/products/{product_id}/reviews",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Reviews of the product", body = Vec<ReviewDto>),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).list(product_id).await?;

    let dtos: Vec<ReviewDto> = reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Review a product as the authenticated user.
///
/// # Returns
/// - `201 Created` - Review stored
/// - `400 Bad Request` - Rating outside 1 to 5
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Product not found
#[utoipa::path(
    post,
    path = "/api/products/{product_id}/reviews",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review stored", body = ReviewDto),
        (status = 400, description = "Rating out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    token: AccessToken,
    Path(product_id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let review = ReviewService::new(&state.db)
        .create(user.user_id, product_id, CreateReviewParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}
