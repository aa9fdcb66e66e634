//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step writes (order placement, order and
//!   account deletion) inside one database transaction

pub mod auth;
pub mod cart;
pub mod category;
pub mod image;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
