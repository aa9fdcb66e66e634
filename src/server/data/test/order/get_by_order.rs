use super::*;
use crate::model::cart::ProductSize;

/// Tests that order items come back joined with their products.
///
/// Expected: Ok(Vec<OrderItem>) with the product attached
#[tokio::test]
async fn returns_items_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderItemRepository::new(db);
    let items = repo.get_by_order(order.order_id).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].size, ProductSize::Medium);
    assert_eq!(
        items[0].product.as_ref().map(|p| p.product_id),
        Some(product.product_id)
    );

    Ok(())
}

/// Tests deleting all items of an order.
///
/// Expected: Ok(1) and no items left
#[tokio::test]
async fn deletes_items_of_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderItemRepository::new(db);

    assert_eq!(repo.delete_by_order(order.order_id).await?, 1);
    assert!(repo.get_by_order(order.order_id).await?.is_empty());

    Ok(())
}
