//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` builder for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let product = factory::create_product(&db).await?;
//! let cart = factory::create_cart(&db, user.user_id, product.product_id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("root")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```

pub mod cart;
pub mod category;
pub mod helpers;
pub mod image;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use cart::create_cart;
pub use category::{create_category, create_category_product};
pub use image::create_image;
pub use order::{create_address, create_order, create_order_item, create_payment};
pub use product::create_product;
pub use review::create_review;
pub use user::{create_admin, create_user};
