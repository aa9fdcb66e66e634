//! Uploaded image models.

use crate::model::image::ImageDto;

/// Stored image including its raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: i32,
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Image {
    /// Converts to the metadata DTO; the bytes are served separately.
    pub fn into_dto(self) -> ImageDto {
        ImageDto {
            id: self.id,
            filename: self.filename,
            content_type: self.content_type,
        }
    }

    pub fn from_entity(entity: entity::image::Model) -> Self {
        Self {
            id: entity.id,
            filename: entity.filename,
            content_type: entity.content_type,
            data: entity.image_data,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateImageParams {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}
