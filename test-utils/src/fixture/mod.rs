//! Test fixtures providing in-memory entity models without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to unit test
//! entity to domain conversions and other logic that never reaches the store.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let admin = fixture::user::entity_builder().role("admin").build();
//! ```

pub mod order;
pub mod product;
pub mod user;

pub use order::{entity as order_entity, entity_builder as order_entity_builder};
pub use product::entity as product_entity;
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
