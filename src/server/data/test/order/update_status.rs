use super::*;

/// Tests changing an order's status.
///
/// Expected: Ok(Order) with the new status
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let order = factory::create_order(db, user.user_id).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update_status(order.order_id, OrderStatus::Delivered)
        .await?;

    assert_eq!(updated.status, OrderStatus::Delivered);
    assert_eq!(updated.customer_name, order.customer_name);

    Ok(())
}
