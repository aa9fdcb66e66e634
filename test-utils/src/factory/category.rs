//! Category factory for creating test categories and their product associations.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    category_name: String,
    category_description: String,
    category_slug: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with a unique name and slug.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            category_name: format!("Category {}", id),
            category_description: "A category used in tests".to_string(),
            category_slug: format!("category-{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.category_name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = slug.into();
        self
    }

    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            category_name: ActiveValue::Set(self.category_name),
            category_description: ActiveValue::Set(self.category_description),
            category_slug: ActiveValue::Set(self.category_slug),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

/// Associates an existing product with an existing category.
pub async fn create_category_product(
    db: &DatabaseConnection,
    category_id: i32,
    product_id: i32,
) -> Result<entity::category_product::Model, DbErr> {
    entity::category_product::ActiveModel {
        category_id: ActiveValue::Set(category_id),
        product_id: ActiveValue::Set(product_id),
    }
    .insert(db)
    .await
}
