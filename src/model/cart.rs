use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::product::ProductDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductSize {
    Small,
    Medium,
    Large,
}

impl ProductSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for ProductSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(format!("unknown product size '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    Increment,
    Decrement,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CartDto {
    pub cart_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub total_cart_products: i32,
    pub product_total: i64,
    pub product_size: ProductSize,
}

/// Cart line joined with the product it holds.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CartItemDto {
    #[serde(flatten)]
    pub cart: CartDto,
    pub product: ProductDto,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AddToCartDto {
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    pub total_cart_products: i32,
    pub product_size: ProductSize,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateCartDto {
    pub action: CartAction,
}
