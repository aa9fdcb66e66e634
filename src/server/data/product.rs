//! Product data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::product::{CreateProductParams, Product, UpdateProductParams};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new product.
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            product_name: ActiveValue::Set(params.name),
            product_description: ActiveValue::Set(params.description),
            product_price: ActiveValue::Set(params.price),
            product_slug: ActiveValue::Set(params.slug),
            image_id: ActiveValue::Set(params.image_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    pub async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Product::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find()
            .filter(entity::product::Column::ProductName.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Product::from_entity))
    }

    /// Gets every product ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Product>, DbErr> {
        let entities = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::ProductId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Product::from_entity).collect())
    }

    /// Gets the products with the given ids, ordered by id.
    pub async fn get_by_ids(&self, product_ids: Vec<i32>) -> Result<Vec<Product>, DbErr> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Product::find()
            .filter(entity::product::Column::ProductId.is_in(product_ids))
            .order_by_asc(entity::product::Column::ProductId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Product::from_entity).collect())
    }

    /// Applies a partial update to a product.
    ///
    /// # Returns
    /// - `Ok(Product)` - The updated product
    /// - `Err(DbErr::RecordNotFound)` - No product with that id
    pub async fn update(
        &self,
        product_id: i32,
        params: UpdateProductParams,
    ) -> Result<Product, DbErr> {
        let entity = entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Product with id {} not found",
                product_id
            )))?;

        let mut active: entity::product::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.product_name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.product_description = ActiveValue::Set(description);
        }
        if let Some(price) = params.price {
            active.product_price = ActiveValue::Set(price);
        }
        if let Some(slug) = params.slug {
            active.product_slug = ActiveValue::Set(slug);
        }
        if let Some(image_id) = params.image_id {
            active.image_id = ActiveValue::Set(Some(image_id));
        }

        let entity = active.update(self.db).await?;

        Ok(Product::from_entity(entity))
    }

    /// Deletes a product.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, 0 if no product had that id
    pub async fn delete(&self, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::delete_by_id(product_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
