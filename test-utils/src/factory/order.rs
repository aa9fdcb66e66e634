//! Order factory for creating orders and the rows that hang off them.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    order_status: String,
    customer_name: String,
    customer_email: String,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory for the given user with a `pending` status.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            order_status: "pending".to_string(),
            customer_name: "Test Customer".to_string(),
            customer_email: "customer@example.com".to_string(),
        }
    }

    /// Sets the status, one of `"pending"`, `"cancelled"` or `"delivered"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.order_status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            order_status: ActiveValue::Set(self.order_status),
            customer_name: ActiveValue::Set(self.customer_name),
            customer_email: ActiveValue::Set(self.customer_email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending order for the user.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}

/// Creates an order item holding one medium unit of the product.
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    user_id: i32,
    product_id: i32,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        user_id: ActiveValue::Set(user_id),
        product_id: ActiveValue::Set(product_id),
        total_cart_products: ActiveValue::Set(1),
        product_total: ActiveValue::Set(1000),
        product_size: ActiveValue::Set("medium".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates the shipping address of an order.
pub async fn create_address(
    db: &DatabaseConnection,
    order_id: i32,
    user_id: i32,
) -> Result<entity::address::Model, DbErr> {
    entity::address::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        user_id: ActiveValue::Set(user_id),
        address_name: ActiveValue::Set("221B Baker Street".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a cash on delivery payment for an order.
pub async fn create_payment(
    db: &DatabaseConnection,
    order_id: i32,
    user_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    entity::payment::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        user_id: ActiveValue::Set(user_id),
        payment_method: ActiveValue::Set("cash on delivery".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
