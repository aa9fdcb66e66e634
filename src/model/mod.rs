//! Request and response DTOs shared by the HTTP API.

pub mod api;
pub mod auth;
pub mod cart;
pub mod category;
pub mod image;
pub mod order;
pub mod product;
pub mod review;
pub mod user;
