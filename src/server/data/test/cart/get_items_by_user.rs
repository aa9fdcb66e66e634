use super::*;

/// Tests listing a user's cart joined with products.
///
/// Expected: Ok(Vec<CartItem>) holding only the user's lines with their products
#[tokio::test]
async fn returns_lines_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .name("Wool Socks")
        .build()
        .await?;
    factory::create_cart(db, user.user_id, product.product_id).await?;
    factory::create_cart(db, other.user_id, product.product_id).await?;

    let repo = CartRepository::new(db);
    let items = repo.get_items_by_user(user.user_id).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].cart.user_id, user.user_id);
    assert_eq!(items[0].product.name, "Wool Socks");

    Ok(())
}
