//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a placed order together with everything it depends on.
///
/// Creates a user, a product, a pending order for that user holding one order item for the
/// product, plus the order's address and payment.
///
/// # Returns
/// - `Ok((user, product, order))` - The created user, product and order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::product::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let product = crate::factory::product::create_product(db).await?;
    let order = crate::factory::order::create_order(db, user.user_id).await?;

    crate::factory::order::create_order_item(db, order.order_id, user.user_id, product.product_id)
        .await?;
    crate::factory::order::create_address(db, order.order_id, user.user_id).await?;
    crate::factory::order::create_payment(db, order.order_id, user.user_id).await?;

    Ok((user, product, order))
}
