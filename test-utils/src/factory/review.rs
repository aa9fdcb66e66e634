//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a five star review of the product written by the user.
pub async fn create_review(
    db: &DatabaseConnection,
    product_id: i32,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        user_id: ActiveValue::Set(user_id),
        review_comment: ActiveValue::Set("Fits well".to_string()),
        review_rating: ActiveValue::Set(5),
        review_date: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
