//! Category service for business logic.
//!
//! Categories group products through a many-to-many association. Admins manage both the
//! categories and the links; listings are public.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{category::CategoryRepository, product::ProductRepository},
    error::AppError,
    model::{
        category::{Category, CategoryProduct, CreateCategoryParams},
        product::Product,
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category.
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category
    /// - `Err(AppError::BadRequest)` - A category with the same name exists
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::BadRequest(
                "category is already present!".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, category_id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_id(category_id)
            .await?
            .ok_or_else(category_not_found)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(category_not_found)
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    /// Deletes a category and its product links. The products themselves stay.
    pub async fn delete(&self, category_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let deleted = CategoryRepository::new(&txn).delete(category_id).await?;
        if deleted == 0 {
            return Err(category_not_found());
        }

        txn.commit().await?;

        Ok(())
    }

    /// Links a product to a category.
    ///
    /// # Returns
    /// - `Ok(CategoryProduct)` - The new link
    /// - `Err(AppError::NotFound)` - Category or product missing
    /// - `Err(AppError::BadRequest)` - The pair is already linked
    pub async fn associate(
        &self,
        category_id: i32,
        product_id: i32,
    ) -> Result<CategoryProduct, AppError> {
        let repo = CategoryRepository::new(self.db);

        self.get_by_id(category_id).await?;
        if ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("product not found!".to_string()));
        }

        if repo.find_association(category_id, product_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "product category association is already present!".to_string(),
            ));
        }

        Ok(repo.associate(category_id, product_id).await?)
    }

    pub async fn dissociate(&self, category_id: i32, product_id: i32) -> Result<(), AppError> {
        let removed = CategoryRepository::new(self.db)
            .dissociate(category_id, product_id)
            .await?;

        if removed == 0 {
            return Err(AppError::NotFound(
                "product category association not found!".to_string(),
            ));
        }

        Ok(())
    }

    /// Lists the products linked to a category.
    pub async fn products_in_category(&self, category_id: i32) -> Result<Vec<Product>, AppError> {
        self.get_by_id(category_id).await?;

        let product_ids = CategoryRepository::new(self.db)
            .get_product_ids(category_id)
            .await?;

        Ok(ProductRepository::new(self.db)
            .get_by_ids(product_ids)
            .await?)
    }
}

fn category_not_found() -> AppError {
    AppError::NotFound("category not found!".to_string())
}
