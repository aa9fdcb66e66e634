use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ProductDto {
    pub product_id: i32,
    pub product_name: String,
    pub product_description: String,
    /// Price in the smallest currency unit.
    pub product_price: i64,
    pub product_slug: String,
    pub image_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateProductDto {
    pub product_name: String,
    pub product_description: String,
    pub product_price: i64,
    /// Derived from the product name when omitted.
    pub product_slug: Option<String>,
    pub image_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateProductDto {
    pub product_name: Option<String>,
    pub product_description: Option<String>,
    pub product_price: Option<i64>,
    pub product_slug: Option<String>,
    pub image_id: Option<i32>,
}
