//! Product factory for creating test catalog products.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db)
///     .name("Linen Shirt")
///     .price(2500)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    product_name: String,
    product_description: String,
    product_price: i64,
    product_slug: String,
    image_id: Option<i32>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - product_name: `"Product {id}"`
    /// - product_price: `1000`
    /// - image_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            product_name: format!("Product {}", id),
            product_description: "A product used in tests".to_string(),
            product_price: 1000,
            product_slug: format!("product-{}", id),
            image_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.product_price = price;
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.product_slug = slug.into();
        self
    }

    /// Links the product to an existing image.
    pub fn image_id(mut self, image_id: i32) -> Self {
        self.image_id = Some(image_id);
        self
    }

    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            product_name: ActiveValue::Set(self.product_name),
            product_description: ActiveValue::Set(self.product_description),
            product_price: ActiveValue::Set(self.product_price),
            product_slug: ActiveValue::Set(self.product_slug),
            image_id: ActiveValue::Set(self.image_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_product_with_custom_price() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let image = crate::factory::create_image(db).await?;
        let product = ProductFactory::new(db)
            .price(2500)
            .image_id(image.id)
            .build()
            .await?;

        assert_eq!(product.product_price, 2500);
        assert_eq!(product.image_id, Some(image.id));

        Ok(())
    }
}
