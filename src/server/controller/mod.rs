//! HTTP request handlers.
//!
//! Handlers extract the request, enforce access through `AuthGuard`, convert DTOs into
//! service parameters and map the results back into DTOs.

pub mod auth;
pub mod cart;
pub mod category;
pub mod image;
pub mod order;
pub mod product;
pub mod user;

#[cfg(test)]
mod test;
