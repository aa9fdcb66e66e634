//! Order domain models and parameters.
//!
//! Covers the order itself, the items copied from the cart when it was placed, and the
//! shipping address and payment recorded alongside it.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        cart::ProductSize,
        order::{
            AddressDto, CreateOrderDto, OrderDto, OrderItemDto, OrderStatus, PaymentDto,
            PaymentMethod,
        },
    },
    server::{model::product::Product, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub customer_name: String,
    pub customer_email: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            order_id: self.order_id,
            user_id: self.user_id,
            order_status: self.status,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            created_at: self.created_at,
        }
    }

    /// # Returns
    /// - `Ok(Order)` - The converted order
    /// - `Err(DbErr::Custom)` - The stored status is not a known status
    pub fn from_entity(entity: entity::order::Model) -> Result<Self, DbErr> {
        Ok(Self {
            order_id: entity.order_id,
            user_id: entity.user_id,
            status: parse_stored("order_status", entity.order_status)?,
            customer_name: entity.customer_name,
            customer_email: entity.customer_email,
            created_at: entity.created_at,
        })
    }
}

/// Order line copied from a cart row when the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub orderitem_id: i32,
    pub order_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub product_total: i64,
    pub size: ProductSize,
    /// The ordered product, `None` if it has since been removed from the catalog.
    pub product: Option<Product>,
}

impl OrderItem {
    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            orderitem_id: self.orderitem_id,
            order_id: self.order_id,
            product_id: self.product_id,
            total_cart_products: self.quantity,
            product_total: self.product_total,
            product_size: self.size,
            product: self.product.map(Product::into_dto),
        }
    }

    pub fn from_entity(
        entity: entity::order_item::Model,
        product: Option<entity::product::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            orderitem_id: entity.orderitem_id,
            order_id: entity.order_id,
            user_id: entity.user_id,
            product_id: entity.product_id,
            quantity: entity.total_cart_products,
            product_total: entity.product_total,
            size: parse_stored("product_size", entity.product_size)?,
            product: product.map(Product::from_entity),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub address_id: i32,
    pub user_id: i32,
    pub order_id: i32,
    pub address_name: String,
}

impl Address {
    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            address_id: self.address_id,
            user_id: self.user_id,
            order_id: self.order_id,
            address_name: self.address_name,
        }
    }

    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            address_id: entity.address_id,
            user_id: entity.user_id,
            order_id: entity.order_id,
            address_name: entity.address_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub payment_id: i32,
    pub user_id: i32,
    pub order_id: i32,
    pub method: PaymentMethod,
}

impl Payment {
    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            payment_id: self.payment_id,
            user_id: self.user_id,
            order_id: self.order_id,
            payment_method: self.method,
        }
    }

    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, DbErr> {
        Ok(Self {
            payment_id: entity.payment_id,
            user_id: entity.user_id,
            order_id: entity.order_id,
            method: parse_stored("payment_method", entity.payment_method)?,
        })
    }
}

/// Order placement request as received from the client.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub order_id: Option<i32>,
    pub status: OrderStatus,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub address_name: String,
    pub payment_method: PaymentMethod,
}

impl CreateOrderParams {
    pub fn from_dto(dto: CreateOrderDto) -> Self {
        Self {
            order_id: dto.order_id,
            status: dto.order_status.unwrap_or_default(),
            customer_name: dto.customer_name,
            customer_email: dto.customer_email,
            address_name: dto.address.address_name,
            payment_method: dto.payment.payment_method,
        }
    }
}

/// Fully resolved order row ready for insertion.
#[derive(Debug, Clone)]
pub struct NewOrderParams {
    pub order_id: Option<i32>,
    pub user_id: i32,
    pub status: OrderStatus,
    pub customer_name: String,
    pub customer_email: String,
}

/// Result of changing an order's status.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderUpdateOutcome {
    /// Status stored; the order is still open.
    Updated(Order),
    /// Order reached a final status and was removed together with its dependents.
    Closed(OrderStatus),
}

impl OrderUpdateOutcome {
    /// Confirmation message for a closed order, e.g. "Order is cancelled".
    pub fn closed_message(status: OrderStatus) -> String {
        format!("Order is {}", status)
    }
}
