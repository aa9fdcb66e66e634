//! Cart domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::cart::{AddToCartDto, CartDto, CartItemDto, ProductSize},
    server::{model::product::Product, util::parse::parse_stored},
};

/// One cart line: a quantity of a product in a given size.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub cart_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Always `quantity × product price`.
    pub product_total: i64,
    pub size: ProductSize,
}

impl Cart {
    pub fn into_dto(self) -> CartDto {
        CartDto {
            cart_id: self.cart_id,
            user_id: self.user_id,
            product_id: self.product_id,
            total_cart_products: self.quantity,
            product_total: self.product_total,
            product_size: self.size,
        }
    }

    /// # Returns
    /// - `Ok(Cart)` - The converted cart line
    /// - `Err(DbErr::Custom)` - The stored size is not a known size
    pub fn from_entity(entity: entity::cart::Model) -> Result<Self, DbErr> {
        Ok(Self {
            cart_id: entity.cart_id,
            user_id: entity.user_id,
            product_id: entity.product_id,
            quantity: entity.total_cart_products,
            product_total: entity.product_total,
            size: parse_stored("product_size", entity.product_size)?,
        })
    }
}

/// Cart line together with the product it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub cart: Cart,
    pub product: Product,
}

impl CartItem {
    pub fn into_dto(self) -> CartItemDto {
        CartItemDto {
            cart: self.cart.into_dto(),
            product: self.product.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddToCartParams {
    pub product_id: i32,
    pub quantity: i32,
    pub size: ProductSize,
}

impl AddToCartParams {
    pub fn from_dto(dto: AddToCartDto) -> Self {
        Self {
            product_id: dto.product_id,
            quantity: dto.total_cart_products,
            size: dto.product_size,
        }
    }
}
