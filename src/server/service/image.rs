//! Image upload and retrieval.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::image::ImageRepository,
    error::AppError,
    model::image::{CreateImageParams, Image},
};

pub struct ImageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an uploaded file after checking it is an image.
    ///
    /// # Returns
    /// - `Ok(Image)` - The stored image
    /// - `Err(AppError::BadRequest)` - Content type is not `image/*`
    pub async fn upload(&self, params: CreateImageParams) -> Result<Image, AppError> {
        if !params.content_type.starts_with("image/") {
            return Err(AppError::BadRequest(
                "Invalid file type. Only images are allowed.".to_string(),
            ));
        }

        let image = ImageRepository::new(self.db).create(params).await?;

        Ok(image)
    }

    pub async fn fetch(&self, image_id: i32) -> Result<Image, AppError> {
        ImageRepository::new(self.db)
            .find_by_id(image_id)
            .await?
            .ok_or_else(|| AppError::NotFound("image not found!".to_string()))
    }
}
