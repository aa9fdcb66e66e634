//! Ecomweb Test Utils
//!
//! Shared testing utilities for the storefront backend. Provides a builder for test contexts
//! backed by in-memory SQLite databases, factories that insert entities with sensible
//! defaults, and fixtures that build entity models without touching a database.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn adds_product_to_cart() -> Result<(), DbErr> {
//!     let test = TestBuilder::new()
//!         .with_storefront_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let product = factory::create_product(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
