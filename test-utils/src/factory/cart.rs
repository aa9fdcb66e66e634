//! Cart factory for creating cart line items.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating cart rows.
///
/// The user and product must already exist. `product_total` defaults to
/// `quantity × 1000`, matching the default product price of the product factory.
pub struct CartFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    product_id: i32,
    quantity: i32,
    product_total: Option<i64>,
    size: String,
}

impl<'a> CartFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, product_id: i32) -> Self {
        Self {
            db,
            user_id,
            product_id,
            quantity: 1,
            product_total: None,
            size: "medium".to_string(),
        }
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn product_total(mut self, product_total: i64) -> Self {
        self.product_total = Some(product_total);
        self
    }

    /// Sets the size, one of `"small"`, `"medium"` or `"large"`.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub async fn build(self) -> Result<entity::cart::Model, DbErr> {
        let product_total = self
            .product_total
            .unwrap_or(1000 * i64::from(self.quantity));

        entity::cart::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            product_id: ActiveValue::Set(self.product_id),
            total_cart_products: ActiveValue::Set(self.quantity),
            product_total: ActiveValue::Set(product_total),
            product_size: ActiveValue::Set(self.size),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a single medium-sized cart row with quantity 1.
pub async fn create_cart(
    db: &DatabaseConnection,
    user_id: i32,
    product_id: i32,
) -> Result<entity::cart::Model, DbErr> {
    CartFactory::new(db, user_id, product_id).build().await
}
