use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::review::{CreateReviewParams, Review};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        product_id: i32,
        user_id: i32,
        params: CreateReviewParams,
    ) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            user_id: ActiveValue::Set(user_id),
            review_comment: ActiveValue::Set(params.comment),
            review_rating: ActiveValue::Set(params.rating),
            review_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Gets a product's reviews, newest first.
    pub async fn get_by_product(&self, product_id: i32) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::ProductId.eq(product_id))
            .order_by_desc(entity::review::Column::ReviewDate)
            .order_by_desc(entity::review::Column::ReviewId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    pub async fn delete_by_product(&self, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Review::delete_many()
            .filter(entity::review::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Review::delete_many()
            .filter(entity::review::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
