use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ReviewDto {
    pub review_id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub review_comment: String,
    /// Star rating from 1 to 5.
    pub review_rating: i16,
    pub review_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateReviewDto {
    pub review_comment: String,
    pub review_rating: i16,
}
