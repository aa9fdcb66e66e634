use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::order::Address;

pub struct AddressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        order_id: i32,
        user_id: i32,
        address_name: String,
    ) -> Result<Address, DbErr> {
        let entity = entity::address::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            user_id: ActiveValue::Set(user_id),
            address_name: ActiveValue::Set(address_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Address::from_entity(entity))
    }

    pub async fn find_by_order(&self, order_id: i32) -> Result<Option<Address>, DbErr> {
        let entity = entity::prelude::Address::find()
            .filter(entity::address::Column::OrderId.eq(order_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Address::from_entity))
    }

    pub async fn delete_by_order(&self, order_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Address::delete_many()
            .filter(entity::address::Column::OrderId.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Address::delete_many()
            .filter(entity::address::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
