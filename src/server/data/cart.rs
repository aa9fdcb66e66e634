//! Cart data repository.
//!
//! Cart rows are keyed by user, product and size; the service layer keeps at most one row
//! per combination by incrementing existing rows instead of inserting duplicates.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::cart::ProductSize,
    server::model::{
        cart::{AddToCartParams, Cart, CartItem},
        product::Product,
    },
};

pub struct CartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new cart line.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the cart
    /// - `params` - Product, quantity and size
    /// - `product_total` - Precomputed `quantity × price`
    pub async fn create(
        &self,
        user_id: i32,
        params: &AddToCartParams,
        product_total: i64,
    ) -> Result<Cart, DbErr> {
        let entity = entity::cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            product_id: ActiveValue::Set(params.product_id),
            total_cart_products: ActiveValue::Set(params.quantity),
            product_total: ActiveValue::Set(product_total),
            product_size: ActiveValue::Set(params.size.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Cart::from_entity(entity)
    }

    /// Finds a cart line owned by the given user.
    ///
    /// # Returns
    /// - `Ok(Some(Cart))` - Line exists and belongs to the user
    /// - `Ok(None)` - No such line, or it belongs to someone else
    pub async fn find_for_user(&self, cart_id: i32, user_id: i32) -> Result<Option<Cart>, DbErr> {
        entity::prelude::Cart::find_by_id(cart_id)
            .filter(entity::cart::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(Cart::from_entity)
            .transpose()
    }

    /// Finds the user's line for a product in a given size.
    pub async fn find_line(
        &self,
        user_id: i32,
        product_id: i32,
        size: ProductSize,
    ) -> Result<Option<Cart>, DbErr> {
        entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .filter(entity::cart::Column::ProductId.eq(product_id))
            .filter(entity::cart::Column::ProductSize.eq(size.as_str()))
            .one(self.db)
            .await?
            .map(Cart::from_entity)
            .transpose()
    }

    /// Overwrites the quantity and total of a cart line.
    ///
    /// # Returns
    /// - `Ok(Cart)` - The updated line
    /// - `Err(DbErr::RecordNotFound)` - No line with that id
    pub async fn set_quantity(
        &self,
        cart_id: i32,
        quantity: i32,
        product_total: i64,
    ) -> Result<Cart, DbErr> {
        let entity = entity::cart::ActiveModel {
            cart_id: ActiveValue::Unchanged(cart_id),
            total_cart_products: ActiveValue::Set(quantity),
            product_total: ActiveValue::Set(product_total),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Cart::from_entity(entity)
    }

    /// Gets the user's cart lines ordered by id.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Cart>, DbErr> {
        entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .order_by_asc(entity::cart::Column::CartId)
            .all(self.db)
            .await?
            .into_iter()
            .map(Cart::from_entity)
            .collect()
    }

    /// Gets the user's cart lines joined with their products.
    pub async fn get_items_by_user(&self, user_id: i32) -> Result<Vec<CartItem>, DbErr> {
        let rows = entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .order_by_asc(entity::cart::Column::CartId)
            .find_also_related(entity::prelude::Product)
            .all(self.db)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for (cart, product) in rows {
            // Lines are removed with their product, so the join always matches
            let Some(product) = product else {
                continue;
            };

            items.push(CartItem {
                cart: Cart::from_entity(cart)?,
                product: Product::from_entity(product),
            });
        }

        Ok(items)
    }

    pub async fn delete(&self, cart_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Cart::delete_by_id(cart_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Cart::delete_many()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_product(&self, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Cart::delete_many()
            .filter(entity::cart::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
