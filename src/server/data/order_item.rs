//! Order item data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{cart::Cart, order::OrderItem};

pub struct OrderItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Copies a cart line into an order item of the given order.
    ///
    /// Quantity, total and size are taken from the cart line unchanged.
    pub async fn create_from_cart(&self, order_id: i32, cart: &Cart) -> Result<OrderItem, DbErr> {
        let entity = entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            user_id: ActiveValue::Set(cart.user_id),
            product_id: ActiveValue::Set(cart.product_id),
            total_cart_products: ActiveValue::Set(cart.quantity),
            product_total: ActiveValue::Set(cart.product_total),
            product_size: ActiveValue::Set(cart.size.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        OrderItem::from_entity(entity, None)
    }

    /// Gets the items of an order joined with their products.
    pub async fn get_by_order(&self, order_id: i32) -> Result<Vec<OrderItem>, DbErr> {
        entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_item::Column::OrderitemId)
            .find_also_related(entity::prelude::Product)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(item, product)| OrderItem::from_entity(item, product))
            .collect()
    }

    pub async fn delete_by_order(&self, order_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OrderItem::delete_many()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OrderItem::delete_many()
            .filter(entity::order_item::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_product(&self, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OrderItem::delete_many()
            .filter(entity::order_item::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
