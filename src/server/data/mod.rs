//! Database repository layer for all domain entities.
//!
//! Each repository wraps a connection and performs the CRUD operations for one table,
//! converting entity models into domain models at the boundary. Repositories are generic
//! over `ConnectionTrait` so services can run several of them inside one transaction.

pub mod address;
pub mod cart;
pub mod category;
pub mod image;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod product;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
