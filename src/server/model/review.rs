//! Product review models.

use chrono::{DateTime, Utc};

use crate::model::review::{CreateReviewDto, ReviewDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub comment: String,
    pub rating: i16,
    pub review_date: DateTime<Utc>,
}

impl Review {
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            review_id: self.review_id,
            product_id: self.product_id,
            user_id: self.user_id,
            review_comment: self.comment,
            review_rating: self.rating,
            review_date: self.review_date,
        }
    }

    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            review_id: entity.review_id,
            product_id: entity.product_id,
            user_id: entity.user_id,
            comment: entity.review_comment,
            rating: entity.review_rating,
            review_date: entity.review_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub comment: String,
    pub rating: i16,
}

impl CreateReviewParams {
    pub fn from_dto(dto: CreateReviewDto) -> Self {
        Self {
            comment: dto.review_comment,
            rating: dto.review_rating,
        }
    }
}
