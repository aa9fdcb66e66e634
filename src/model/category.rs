use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CategoryDto {
    pub category_id: i32,
    pub category_name: String,
    pub category_description: String,
    pub category_slug: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateCategoryDto {
    pub category_name: String,
    pub category_description: String,
    /// Derived from the category name when omitted.
    pub category_slug: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AssociateProductDto {
    pub product_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CategoryProductDto {
    pub category_id: i32,
    pub product_id: i32,
}
