//! Order data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::order::OrderStatus,
    server::model::order::{NewOrderParams, Order},
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new order.
    ///
    /// Uses `params.order_id` as the primary key when given, otherwise lets the database
    /// assign one. On PostgreSQL an explicit id does not advance the serial sequence, so the
    /// sequence is moved past the highest id afterwards.
    ///
    /// # Returns
    /// - `Ok(Order)` - The inserted order
    /// - `Err(DbErr)` - Insert failed, including a unique violation on a taken id
    pub async fn create(&self, params: NewOrderParams) -> Result<Order, DbErr> {
        let explicit_id = params.order_id.is_some();
        let order_id = match params.order_id {
            Some(order_id) => ActiveValue::Set(order_id),
            None => ActiveValue::NotSet,
        };

        let entity = entity::order::ActiveModel {
            order_id,
            user_id: ActiveValue::Set(params.user_id),
            order_status: ActiveValue::Set(params.status.as_str().to_string()),
            customer_name: ActiveValue::Set(params.customer_name),
            customer_email: ActiveValue::Set(params.customer_email),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        if explicit_id && self.db.get_database_backend() == DbBackend::Postgres {
            self.db
                .execute_unprepared(
                    r#"SELECT setval(pg_get_serial_sequence('"order"', 'order_id'), (SELECT MAX(order_id) FROM "order"))"#,
                )
                .await?;
        }

        Order::from_entity(entity)
    }

    pub async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, DbErr> {
        entity::prelude::Order::find_by_id(order_id)
            .one(self.db)
            .await?
            .map(Order::from_entity)
            .transpose()
    }

    /// Finds an order owned by the given user.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order exists and belongs to the user
    /// - `Ok(None)` - No such order, or it belongs to someone else
    pub async fn find_for_user(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<Option<Order>, DbErr> {
        entity::prelude::Order::find_by_id(order_id)
            .filter(entity::order::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(Order::from_entity)
            .transpose()
    }

    /// Gets the user's orders, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::OrderId)
            .all(self.db)
            .await?
            .into_iter()
            .map(Order::from_entity)
            .collect()
    }

    /// Sets the status of an order.
    ///
    /// # Returns
    /// - `Ok(Order)` - The updated order
    /// - `Err(DbErr::RecordNotFound)` - No order with that id
    pub async fn update_status(&self, order_id: i32, status: OrderStatus) -> Result<Order, DbErr> {
        let entity = entity::order::ActiveModel {
            order_id: ActiveValue::Unchanged(order_id),
            order_status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Order::from_entity(entity)
    }

    pub async fn delete(&self, order_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Order::delete_by_id(order_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Order::delete_many()
            .filter(entity::order::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
