//! SeaORM entity models for the storefront schema.

pub mod prelude;

pub mod address;
pub mod cart;
pub mod category;
pub mod category_product;
pub mod image;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod product;
pub mod review;
pub mod user;
