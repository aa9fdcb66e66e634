//! Category data repository, including the category to product association table.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::category::{Category, CategoryProduct, CreateCategoryParams};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            category_name: ActiveValue::Set(params.name),
            category_description: ActiveValue::Set(params.description),
            category_slug: ActiveValue::Set(params.slug),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(category_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::CategoryName.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::CategorySlug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Gets every category ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::CategoryId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Deletes a category together with its product associations.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted categories, 0 if none had that id
    pub async fn delete(&self, category_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CategoryProduct::delete_many()
            .filter(entity::category_product::Column::CategoryId.eq(category_id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Category::delete_by_id(category_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_association(
        &self,
        category_id: i32,
        product_id: i32,
    ) -> Result<Option<CategoryProduct>, DbErr> {
        let entity = entity::prelude::CategoryProduct::find_by_id((category_id, product_id))
            .one(self.db)
            .await?;

        Ok(entity.map(CategoryProduct::from_entity))
    }

    /// Links a product to a category.
    pub async fn associate(
        &self,
        category_id: i32,
        product_id: i32,
    ) -> Result<CategoryProduct, DbErr> {
        let entity = entity::category_product::ActiveModel {
            category_id: ActiveValue::Set(category_id),
            product_id: ActiveValue::Set(product_id),
        }
        .insert(self.db)
        .await?;

        Ok(CategoryProduct::from_entity(entity))
    }

    /// Removes the link between a product and a category.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted links, 0 if the pair was not linked
    pub async fn dissociate(&self, category_id: i32, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CategoryProduct::delete_by_id((category_id, product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every category link of a product.
    pub async fn dissociate_product(&self, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CategoryProduct::delete_many()
            .filter(entity::category_product::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the ids of all products linked to a category.
    pub async fn get_product_ids(&self, category_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::CategoryProduct::find()
            .select_only()
            .column(entity::category_product::Column::ProductId)
            .filter(entity::category_product::Column::CategoryId.eq(category_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
