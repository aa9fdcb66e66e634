//! Product catalog service.
//!
//! Products are managed by admins and read by everyone. Deleting a product removes every
//! row that references it in one transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        cart::CartRepository, category::CategoryRepository, image::ImageRepository,
        order_item::OrderItemRepository, product::ProductRepository, review::ReviewRepository,
    },
    error::AppError,
    model::product::{CreateProductParams, Product, UpdateProductParams},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product.
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product
    /// - `Err(AppError::BadRequest)` - Negative price, or a product with the same name exists
    /// - `Err(AppError::NotFound)` - The referenced image does not exist
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        ensure_valid_price(params.price)?;

        let product_repo = ProductRepository::new(self.db);

        if product_repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::BadRequest(
                "product is already present!".to_string(),
            ));
        }
        if let Some(image_id) = params.image_id {
            self.ensure_image_exists(image_id).await?;
        }

        let product = product_repo.create(params).await?;

        Ok(product)
    }

    pub async fn get_by_id(&self, product_id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .ok_or_else(product_not_found)
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db).get_all().await?)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Product)` - The updated product
    /// - `Err(AppError::NotFound)` - Product or referenced image missing
    /// - `Err(AppError::BadRequest)` - Negative price, or new name belongs to another product
    pub async fn update(
        &self,
        product_id: i32,
        params: UpdateProductParams,
    ) -> Result<Product, AppError> {
        if let Some(price) = params.price {
            ensure_valid_price(price)?;
        }

        let product_repo = ProductRepository::new(self.db);

        let existing = product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(product_not_found)?;

        if let Some(name) = params.name.as_deref().filter(|n| *n != existing.name) {
            if product_repo.find_by_name(name).await?.is_some() {
                return Err(AppError::BadRequest(
                    "product is already present!".to_string(),
                ));
            }
        }
        if let Some(image_id) = params.image_id {
            self.ensure_image_exists(image_id).await?;
        }

        let product = product_repo.update(product_id, params).await?;

        Ok(product)
    }

    /// Deletes a product along with its category links, cart lines, order items and
    /// reviews.
    pub async fn delete(&self, product_id: i32) -> Result<(), AppError> {
        if ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .is_none()
        {
            return Err(product_not_found());
        }

        let txn = self.db.begin().await?;

        CategoryRepository::new(&txn)
            .dissociate_product(product_id)
            .await?;
        CartRepository::new(&txn).delete_by_product(product_id).await?;
        OrderItemRepository::new(&txn)
            .delete_by_product(product_id)
            .await?;
        ReviewRepository::new(&txn).delete_by_product(product_id).await?;
        ProductRepository::new(&txn).delete(product_id).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn ensure_image_exists(&self, image_id: i32) -> Result<(), AppError> {
        match ImageRepository::new(self.db).find_by_id(image_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("image not found!".to_string())),
        }
    }
}

fn product_not_found() -> AppError {
    AppError::NotFound("product not found!".to_string())
}

fn ensure_valid_price(price: i64) -> Result<(), AppError> {
    if price < 0 {
        return Err(AppError::BadRequest(
            "Price must not be negative".to_string(),
        ));
    }

    Ok(())
}
