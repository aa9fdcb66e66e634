use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{model::order::PaymentMethod, server::model::order::Payment};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        order_id: i32,
        user_id: i32,
        method: PaymentMethod,
    ) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            user_id: ActiveValue::Set(user_id),
            payment_method: ActiveValue::Set(method.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Payment::from_entity(entity)
    }

    pub async fn find_by_order(&self, order_id: i32) -> Result<Option<Payment>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::OrderId.eq(order_id))
            .one(self.db)
            .await?
            .map(Payment::from_entity)
            .transpose()
    }

    pub async fn delete_by_order(&self, order_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Payment::delete_many()
            .filter(entity::payment::Column::OrderId.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Payment::delete_many()
            .filter(entity::payment::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
