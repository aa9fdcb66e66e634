//! Product review service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{product::ProductRepository, review::ReviewRepository},
    error::AppError,
    model::review::{CreateReviewParams, Review},
};

const RATING_RANGE: std::ops::RangeInclusive<i16> = 1..=5;

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a review of a product by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Review)` - The stored review
    /// - `Err(AppError::BadRequest)` - Rating outside 1 to 5
    /// - `Err(AppError::NotFound)` - Product does not exist
    pub async fn create(
        &self,
        user_id: i32,
        product_id: i32,
        params: CreateReviewParams,
    ) -> Result<Review, AppError> {
        if !RATING_RANGE.contains(&params.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        self.ensure_product_exists(product_id).await?;

        Ok(ReviewRepository::new(self.db)
            .create(product_id, user_id, params)
            .await?)
    }

    /// Lists a product's reviews, newest first.
    pub async fn list(&self, product_id: i32) -> Result<Vec<Review>, AppError> {
        self.ensure_product_exists(product_id).await?;

        Ok(ReviewRepository::new(self.db)
            .get_by_product(product_id)
            .await?)
    }

    async fn ensure_product_exists(&self, product_id: i32) -> Result<(), AppError> {
        match ProductRepository::new(self.db).find_by_id(product_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("product not found!".to_string())),
        }
    }
}
