//! Image factory for creating stored test images.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test images.
pub struct ImageFactory<'a> {
    db: &'a DatabaseConnection,
    filename: String,
    content_type: String,
    image_data: Vec<u8>,
}

impl<'a> ImageFactory<'a> {
    /// Creates a new ImageFactory holding a few bytes of PNG signature.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            filename: format!("image_{}.png", next_id()),
            content_type: "image/png".to_string(),
            image_data: vec![0x89, b'P', b'N', b'G'],
        }
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn data(mut self, data: Vec<u8>) -> Self {
        self.image_data = data;
        self
    }

    pub async fn build(self) -> Result<entity::image::Model, DbErr> {
        entity::image::ActiveModel {
            filename: ActiveValue::Set(self.filename),
            content_type: ActiveValue::Set(self.content_type),
            image_data: ActiveValue::Set(self.image_data),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image with default values.
pub async fn create_image(db: &DatabaseConnection) -> Result<entity::image::Model, DbErr> {
    ImageFactory::new(db).build().await
}
