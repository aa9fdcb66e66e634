use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::image::{CreateImageParams, Image};

pub struct ImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores an uploaded image.
    pub async fn create(&self, params: CreateImageParams) -> Result<Image, DbErr> {
        let entity = entity::image::ActiveModel {
            filename: ActiveValue::Set(params.filename),
            content_type: ActiveValue::Set(params.content_type),
            image_data: ActiveValue::Set(params.data),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Image::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Image>, DbErr> {
        let entity = entity::prelude::Image::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Image::from_entity))
    }
}
