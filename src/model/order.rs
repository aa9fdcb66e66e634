use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::{cart::ProductSize, product::ProductDto};

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Cancelled,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
            Self::Delivered => "delivered",
        }
    }

    /// Cancelled and delivered orders are removed together with their dependents.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "cancelled" => Ok(Self::Cancelled),
            "delivered" => Ok(Self::Delivered),
            other => Err(format!("unknown order status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "cash on delivery")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "cash on delivery",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash on delivery" => Ok(Self::CashOnDelivery),
            other => Err(format!("unknown payment method '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct OrderDto {
    pub order_id: i32,
    pub user_id: i32,
    pub order_status: OrderStatus,
    pub customer_name: String,
    pub customer_email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateAddressDto {
    pub address_name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct CreatePaymentDto {
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// Places an order from the caller's cart.
///
/// Customer name and email default to the caller's account details.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateOrderDto {
    /// Client-chosen id; rejected if an order with it already exists.
    pub order_id: Option<i32>,
    pub order_status: Option<OrderStatus>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub address: CreateAddressDto,
    #[serde(default)]
    pub payment: CreatePaymentDto,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateOrderDto {
    pub order_status: OrderStatus,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct OrderItemDto {
    pub orderitem_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub total_cart_products: i32,
    pub product_total: i64,
    pub product_size: ProductSize,
    pub product: Option<ProductDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct AddressDto {
    pub address_id: i32,
    pub user_id: i32,
    pub order_id: i32,
    pub address_name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PaymentDto {
    pub payment_id: i32,
    pub user_id: i32,
    pub order_id: i32,
    pub payment_method: PaymentMethod,
}
