use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        category::{AssociateProductDto, CategoryDto, CategoryProductDto, CreateCategoryDto},
        product::ProductDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard, Permission},
        model::category::CreateCategoryParams,
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create a product category.
///
/// The slug is derived from the name when none is given.
///
/// # Access Control
/// - `Admin` - Only admins can create categories
///
/// # Returns
/// - `201 Created` - Category created
/// - `400 Bad Request` - Category name already taken
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated, or not an admin
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Category already present", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    token: AccessToken,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "The category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .get_by_id(category_id)
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/categories/slug/{slug}",
    tag = CATEGORY_TAG,
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "The category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
)]
pub async fn get_category_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category. Its products are kept; only the links are removed.
///
/// # Access Control
/// - `Admin` - Only admins can delete categories
#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    token: AccessToken,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db).delete(category_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("category deleted"))))
}

/// List the products linked to a category.
#[utoipa::path(
    get,
    path = "/api/categories/{category_id}/products",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Products in the category", body = Vec<ProductDto>),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
)]
pub async fn get_category_products(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let products = CategoryService::new(&state.db)
        .products_in_category(category_id)
        .await?;

    let dtos: Vec<ProductDto> = products.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Link a product to a category.
///
/// # Access Control
/// - `Admin` - Only admins can link products
///
/// # Returns
/// - `201 Created` - Link created
/// - `400 Bad Request` - Already linked
/// - `404 Not Found` - Category or product missing
#[utoipa::path(
    post,
    path = "/api/categories/{category_id}/products",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = AssociateProductDto,
    responses(
        (status = 201, description = "Product linked", body = CategoryProductDto),
        (status = 400, description = "Association already present", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Category or product not found", body = ErrorDto)
    ),
)]
pub async fn associate_product(
    State(state): State<AppState>,
    token: AccessToken,
    Path(category_id): Path<i32>,
    Json(payload): Json<AssociateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Permission::Admin])
        .await?;

    let link = CategoryService::new(&state.db)
        .associate(category_id, payload.product_id)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into_dto())))
}

/// Remove the link between a product and a category.
///
/// # Access Control
/// - `Admin` - Only admins can unlink products
#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}/products/{product_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product unlinked", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Association not found", body = ErrorDto)
    ),
)]
pub async fn dissociate_product(
    State(state): State<AppState>,
    token: AccessToken,
    Path((category_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db)
        .dissociate(category_id, product_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("product category association deleted")),
    ))
}
