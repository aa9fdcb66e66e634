//! HTTP routes, middleware layers and the OpenAPI document.

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, TokenDto},
        cart::{AddToCartDto, CartAction, CartDto, CartItemDto, ProductSize, UpdateCartDto},
        category::{AssociateProductDto, CategoryDto, CategoryProductDto, CreateCategoryDto},
        image::{ImageDto, UploadImageDto},
        order::{
            AddressDto, CreateAddressDto, CreateOrderDto, CreatePaymentDto, OrderDto,
            OrderItemDto, OrderStatus, PaymentDto, PaymentMethod, UpdateOrderDto,
        },
        product::{CreateProductDto, ProductDto, UpdateProductDto},
        review::{CreateReviewDto, ReviewDto},
        user::{CreateUserDto, UpdateUserDto, UserDto, UserRole},
    },
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            cart::{self, CART_TAG},
            category::{self, CATEGORY_TAG},
            image::{self, IMAGE_TAG},
            order::{self, ORDER_TAG},
            product::{self, PRODUCT_TAG},
            user::{self, USER_TAG},
        },
        middleware::{auth::protected_gate, cookie::ACCESS_TOKEN_COOKIE},
        state::AppState,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        components.add_security_scheme(
            "AccessTokenCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                ACCESS_TOKEN_COOKIE,
                "Access token cookie set by POST /api/auth/login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "ecomweb API",
        description = "Storefront backend: accounts, catalog, cart and orders."
    ),
    security(("BearerToken" = []), ("AccessTokenCookie" = [])),
    paths(
        auth::signup,
        auth::login,
        auth::refresh,
        auth::logout,
        auth::get_user,
        user::update_me,
        user::delete_user,
        image::upload_image,
        image::get_image,
        product::create_product,
        product::get_products,
        product::get_product,
        product::update_product,
        product::delete_product,
        product::get_reviews,
        product::create_review,
        category::create_category,
        category::get_categories,
        category::get_category,
        category::get_category_by_slug,
        category::delete_category,
        category::get_category_products,
        category::associate_product,
        category::dissociate_product,
        cart::get_cart,
        cart::add_to_cart,
        cart::update_cart,
        cart::delete_cart,
        order::create_order,
        order::get_orders,
        order::get_order,
        order::update_order,
        order::delete_order,
        order::get_order_items,
        order::delete_order_items,
        order::get_order_address,
        order::delete_order_address,
        order::get_order_payment,
        order::delete_order_payment,
    ),
    components(schemas(
        ErrorDto, MessageDto, LoginDto, TokenDto, UserRole, UserDto, CreateUserDto,
        UpdateUserDto, ImageDto, UploadImageDto, ProductDto, CreateProductDto,
        UpdateProductDto, ReviewDto, CreateReviewDto, CategoryDto, CreateCategoryDto,
        AssociateProductDto, CategoryProductDto, ProductSize, CartAction, CartDto,
        CartItemDto, AddToCartDto, UpdateCartDto, OrderStatus, PaymentMethod, OrderDto,
        CreateOrderDto, CreateAddressDto, CreatePaymentDto, UpdateOrderDto, OrderItemDto,
        AddressDto, PaymentDto,
    )),
    tags(
        (name = AUTH_TAG, description = "Signup, login and token handling"),
        (name = USER_TAG, description = "Account management"),
        (name = IMAGE_TAG, description = "Product image storage"),
        (name = PRODUCT_TAG, description = "Product catalog and reviews"),
        (name = CATEGORY_TAG, description = "Categories and their products"),
        (name = CART_TAG, description = "Shopping cart"),
        (name = ORDER_TAG, description = "Orders, delivery addresses and payments"),
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Builds the application router with all routes and layers.
///
/// The cookie manager is the outermost layer so the protected-URL gate and the handlers
/// can read the token cookies.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/users/me", patch(user::update_me))
        .route("/api/users/{user_id}", delete(user::delete_user))
        .route("/api/images", post(image::upload_image))
        .route("/api/images/{image_id}", get(image::get_image))
        .route(
            "/api/products",
            get(product::get_products).post(product::create_product),
        )
        .route(
            "/api/products/{product_id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route(
            "/api/products/{product_id}/reviews",
            get(product::get_reviews).post(product::create_review),
        )
        .route(
            "/api/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/api/categories/slug/{slug}",
            get(category::get_category_by_slug),
        )
        .route(
            "/api/categories/{category_id}",
            get(category::get_category).delete(category::delete_category),
        )
        .route(
            "/api/categories/{category_id}/products",
            get(category::get_category_products).post(category::associate_product),
        )
        .route(
            "/api/categories/{category_id}/products/{product_id}",
            delete(category::dissociate_product),
        )
        .route("/api/cart", get(cart::get_cart).post(cart::add_to_cart))
        .route(
            "/api/cart/{cart_id}",
            put(cart::update_cart).delete(cart::delete_cart),
        )
        .route(
            "/api/orders",
            get(order::get_orders).post(order::create_order),
        )
        .route(
            "/api/orders/{order_id}",
            get(order::get_order)
                .patch(order::update_order)
                .delete(order::delete_order),
        )
        .route(
            "/api/orders/{order_id}/items",
            get(order::get_order_items).delete(order::delete_order_items),
        )
        .route(
            "/api/orders/{order_id}/address",
            get(order::get_order_address).delete(order::delete_order_address),
        )
        .route(
            "/api/orders/{order_id}/payment",
            get(order::get_order_payment).delete(order::delete_order_payment),
        )
        .route("/api/openapi.json", get(openapi))
        .layer(middleware::from_fn_with_state(state.clone(), protected_gate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
