//! Shopping cart service.
//!
//! A user holds at most one cart line per product and size. Adding a product that is
//! already in the cart in the same size grows the existing line. Line totals are always
//! recomputed from the product's current price.

use sea_orm::DatabaseConnection;

use crate::{
    model::cart::CartAction,
    server::{
        data::{cart::CartRepository, product::ProductRepository},
        error::AppError,
        model::{
            cart::{AddToCartParams, Cart, CartItem},
            product::Product,
        },
    },
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a product to the user's cart.
    ///
    /// # Returns
    /// - `Ok(Cart)` - The new line, or the existing line with the summed quantity
    /// - `Err(AppError::BadRequest)` - Quantity below 1, or the line would overflow
    /// - `Err(AppError::NotFound)` - Product does not exist
    pub async fn add(&self, user_id: i32, params: AddToCartParams) -> Result<Cart, AppError> {
        if params.quantity < 1 {
            return Err(AppError::BadRequest(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let product = self.product(params.product_id).await?;
        let cart_repo = CartRepository::new(self.db);

        let cart = match cart_repo
            .find_line(user_id, params.product_id, params.size)
            .await?
        {
            Some(line) => {
                let quantity = line
                    .quantity
                    .checked_add(params.quantity)
                    .ok_or_else(quantity_too_large)?;
                cart_repo
                    .set_quantity(line.cart_id, quantity, line_total(&product, quantity)?)
                    .await?
            }
            None => {
                let total = line_total(&product, params.quantity)?;
                cart_repo.create(user_id, &params, total).await?
            }
        };

        Ok(cart)
    }

    /// Steps a cart line's quantity up or down by one.
    ///
    /// # Returns
    /// - `Ok(Some(Cart))` - The updated line
    /// - `Ok(None)` - The line held a single unit and was removed by a decrement
    /// - `Err(AppError::BadRequest)` - The line would overflow
    /// - `Err(AppError::NotFound)` - No such line in the user's cart
    pub async fn update(
        &self,
        user_id: i32,
        cart_id: i32,
        action: CartAction,
    ) -> Result<Option<Cart>, AppError> {
        let cart_repo = CartRepository::new(self.db);
        let line = self.line(user_id, cart_id).await?;

        let quantity = match action {
            CartAction::Increment => line
                .quantity
                .checked_add(1)
                .ok_or_else(quantity_too_large)?,
            CartAction::Decrement => line.quantity.saturating_sub(1),
        };

        if quantity < 1 {
            cart_repo.delete(cart_id).await?;
            return Ok(None);
        }

        let product = self.product(line.product_id).await?;
        let cart = cart_repo
            .set_quantity(cart_id, quantity, line_total(&product, quantity)?)
            .await?;

        Ok(Some(cart))
    }

    pub async fn delete(&self, user_id: i32, cart_id: i32) -> Result<(), AppError> {
        self.line(user_id, cart_id).await?;

        CartRepository::new(self.db).delete(cart_id).await?;

        Ok(())
    }

    /// Lists the user's cart lines with their products.
    pub async fn list(&self, user_id: i32) -> Result<Vec<CartItem>, AppError> {
        Ok(CartRepository::new(self.db)
            .get_items_by_user(user_id)
            .await?)
    }

    async fn line(&self, user_id: i32, cart_id: i32) -> Result<Cart, AppError> {
        CartRepository::new(self.db)
            .find_for_user(cart_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("cart not found!".to_string()))
    }

    async fn product(&self, product_id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::NotFound("product not found!".to_string()))
    }
}

fn line_total(product: &Product, quantity: i32) -> Result<i64, AppError> {
    product
        .price
        .checked_mul(i64::from(quantity))
        .ok_or_else(|| AppError::BadRequest("Cart total is too large".to_string()))
}

fn quantity_too_large() -> AppError {
    AppError::BadRequest("Cart quantity is too large".to_string())
}
