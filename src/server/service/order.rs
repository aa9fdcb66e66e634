//! Order service for business logic.
//!
//! Placing an order turns the user's cart into order items and records the delivery
//! address and payment method, all inside one transaction. Orders reaching a final status
//! (`cancelled` or `delivered`) are removed together with their dependents.
//!
//! Every operation is scoped to the calling user: an order owned by someone else is
//! reported as not found.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::order::OrderStatus,
    server::{
        data::{
            address::AddressRepository, cart::CartRepository, order::OrderRepository,
            order_item::OrderItemRepository, payment::PaymentRepository,
        },
        error::AppError,
        model::{
            order::{
                Address, CreateOrderParams, NewOrderParams, Order, OrderItem,
                OrderUpdateOutcome, Payment,
            },
            user::User,
        },
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order from the user's cart.
    ///
    /// Customer name and email default to the user's own when the request leaves them out.
    /// The cart is emptied, and the order, its items, address and payment are written in
    /// one transaction; any failure leaves the cart untouched.
    ///
    /// # Returns
    /// - `Ok(Order)` - The placed order
    /// - `Err(AppError::BadRequest)` - Requested order id already in use, or empty cart
    pub async fn create(&self, user: &User, params: CreateOrderParams) -> Result<Order, AppError> {
        let cart = CartRepository::new(self.db).get_by_user(user.user_id).await?;
        if cart.is_empty() {
            return Err(AppError::BadRequest("Cart is empty!".to_string()));
        }

        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);

        if let Some(order_id) = params.order_id {
            if order_repo.find_by_id(order_id).await?.is_some() {
                return Err(order_already_present());
            }
        }

        let order = order_repo
            .create(NewOrderParams {
                order_id: params.order_id,
                user_id: user.user_id,
                status: params.status,
                customer_name: params
                    .customer_name
                    .unwrap_or_else(|| format!("{} {}", user.firstname, user.lastname)),
                customer_email: params.customer_email.unwrap_or_else(|| user.email.clone()),
            })
            .await
            .map_err(order_insert_error)?;

        let item_repo = OrderItemRepository::new(&txn);
        let cart_repo = CartRepository::new(&txn);
        for line in &cart {
            item_repo.create_from_cart(order.order_id, line).await?;
            cart_repo.delete(line.cart_id).await?;
        }

        AddressRepository::new(&txn)
            .create(order.order_id, user.user_id, params.address_name)
            .await?;
        PaymentRepository::new(&txn)
            .create(order.order_id, user.user_id, params.payment_method)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "User {} placed order {} with {} items",
            user.user_id,
            order.order_id,
            cart.len()
        );

        Ok(order)
    }

    pub async fn get(&self, user_id: i32, order_id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_for_user(order_id, user_id)
            .await?
            .ok_or_else(order_not_found)
    }

    /// Lists the user's orders, newest first.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Changes an order's status.
    ///
    /// A final status closes the order: its address, payment, items and the order row
    /// are deleted in one transaction.
    ///
    /// # Returns
    /// - `Ok(OrderUpdateOutcome::Updated)` - Status stored, order still open
    /// - `Ok(OrderUpdateOutcome::Closed)` - Order reached a final status and was removed
    /// - `Err(AppError::NotFound)` - No such order for this user
    pub async fn update(
        &self,
        user_id: i32,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<OrderUpdateOutcome, AppError> {
        self.get(user_id, order_id).await?;

        if status.is_closed() {
            let txn = self.db.begin().await?;

            OrderRepository::new(&txn)
                .update_status(order_id, status)
                .await?;
            delete_order_cascade(&txn, order_id).await?;

            txn.commit().await?;

            return Ok(OrderUpdateOutcome::Closed(status));
        }

        let order = OrderRepository::new(self.db)
            .update_status(order_id, status)
            .await?;

        Ok(OrderUpdateOutcome::Updated(order))
    }

    /// Deletes an order together with its items, address and payment.
    pub async fn delete(&self, user_id: i32, order_id: i32) -> Result<(), AppError> {
        self.get(user_id, order_id).await?;

        let txn = self.db.begin().await?;
        delete_order_cascade(&txn, order_id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Gets the order's items joined with their products.
    pub async fn items(&self, user_id: i32, order_id: i32) -> Result<Vec<OrderItem>, AppError> {
        self.get(user_id, order_id).await?;

        Ok(OrderItemRepository::new(self.db)
            .get_by_order(order_id)
            .await?)
    }

    pub async fn delete_items(&self, user_id: i32, order_id: i32) -> Result<(), AppError> {
        self.get(user_id, order_id).await?;

        let deleted = OrderItemRepository::new(self.db)
            .delete_by_order(order_id)
            .await?;
        if deleted == 0 {
            return Err(AppError::NotFound("order items not found!".to_string()));
        }

        Ok(())
    }

    pub async fn get_address(&self, user_id: i32, order_id: i32) -> Result<Address, AppError> {
        self.get(user_id, order_id).await?;

        AddressRepository::new(self.db)
            .find_by_order(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("address not found!".to_string()))
    }

    pub async fn delete_address(&self, user_id: i32, order_id: i32) -> Result<(), AppError> {
        self.get(user_id, order_id).await?;

        let deleted = AddressRepository::new(self.db)
            .delete_by_order(order_id)
            .await?;
        if deleted == 0 {
            return Err(AppError::NotFound("address not found!".to_string()));
        }

        Ok(())
    }

    pub async fn get_payment(&self, user_id: i32, order_id: i32) -> Result<Payment, AppError> {
        self.get(user_id, order_id).await?;

        PaymentRepository::new(self.db)
            .find_by_order(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("payment not found!".to_string()))
    }

    pub async fn delete_payment(&self, user_id: i32, order_id: i32) -> Result<(), AppError> {
        self.get(user_id, order_id).await?;

        let deleted = PaymentRepository::new(self.db)
            .delete_by_order(order_id)
            .await?;
        if deleted == 0 {
            return Err(AppError::NotFound("payment not found!".to_string()));
        }

        Ok(())
    }
}

/// Deletes an order's dependents, then the order itself.
async fn delete_order_cascade<C: ConnectionTrait>(db: &C, order_id: i32) -> Result<(), AppError> {
    AddressRepository::new(db).delete_by_order(order_id).await?;
    PaymentRepository::new(db).delete_by_order(order_id).await?;
    OrderItemRepository::new(db).delete_by_order(order_id).await?;
    OrderRepository::new(db).delete(order_id).await?;

    Ok(())
}

fn order_already_present() -> AppError {
    AppError::BadRequest("order is already present!".to_string())
}

/// A concurrent request may take the id between the check and the insert.
fn order_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => order_already_present(),
        _ => err.into(),
    }
}

fn order_not_found() -> AppError {
    AppError::NotFound("order not found!".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn new_order(user_id: i32) -> NewOrderParams {
        NewOrderParams {
            order_id: Some(9),
            user_id,
            status: OrderStatus::Pending,
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn maps_taken_order_id_to_bad_request() {
        let test = TestBuilder::new()
            .with_storefront_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await.unwrap();

        let repo = OrderRepository::new(db);
        repo.create(new_order(user.user_id)).await.unwrap();
        let err = repo.create(new_order(user.user_id)).await.unwrap_err();

        assert!(matches!(
            order_insert_error(err),
            AppError::BadRequest(msg) if msg == "order is already present!"
        ));
    }

    #[test]
    fn keeps_other_database_errors() {
        let err = order_insert_error(DbErr::Custom("boom".to_string()));

        assert!(matches!(err, AppError::DbErr(_)));
    }
}
