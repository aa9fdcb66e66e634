use super::*;

/// Tests creating an order with a database-assigned id.
///
/// Expected: Ok(Order) owned by the user with pending status
#[tokio::test]
async fn creates_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo.create(new_order(user.user_id, None)).await?;

    assert_eq!(order.user_id, user.user_id);
    assert_eq!(order.status, OrderStatus::Pending);

    Ok(())
}

/// Tests creating an order with a client-chosen id.
///
/// Expected: Ok(Order) with that id, findable for its owner only
#[tokio::test]
async fn creates_order_with_explicit_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo.create(new_order(user.user_id, Some(77))).await?;

    assert_eq!(order.order_id, 77);
    assert!(repo.find_for_user(77, user.user_id).await?.is_some());
    assert!(repo.find_for_user(77, other.user_id).await?.is_none());

    Ok(())
}

/// Tests that a database-assigned id never collides with an earlier explicit one.
///
/// Expected: the later order gets a fresh id
#[tokio::test]
async fn assigned_id_skips_explicit_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = OrderRepository::new(db);
    repo.create(new_order(user.user_id, Some(1))).await?;
    let assigned = repo.create(new_order(user.user_id, None)).await?;

    assert_ne!(assigned.order_id, 1);

    Ok(())
}
