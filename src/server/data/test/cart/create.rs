use super::*;

/// Tests inserting a cart line and updating its quantity.
///
/// Expected: Ok(Cart) with the new quantity and total
#[tokio::test]
async fn creates_line_and_sets_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let repo = CartRepository::new(db);
    let cart = repo
        .create(
            user.user_id,
            &AddToCartParams {
                product_id: product.product_id,
                quantity: 2,
                size: ProductSize::Large,
            },
            2000,
        )
        .await?;

    assert_eq!(cart.quantity, 2);
    assert_eq!(cart.size, ProductSize::Large);

    let updated = repo.set_quantity(cart.cart_id, 3, 3000).await?;

    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.product_total, 3000);
    assert_eq!(updated.product_id, product.product_id);

    Ok(())
}

/// Tests that cart lines are only visible to their owner.
///
/// Expected: Ok(None) for another user
#[tokio::test]
async fn hides_line_from_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;
    let cart = factory::create_cart(db, owner.user_id, product.product_id).await?;

    let repo = CartRepository::new(db);

    assert!(repo
        .find_for_user(cart.cart_id, owner.user_id)
        .await?
        .is_some());
    assert!(repo
        .find_for_user(cart.cart_id, other.user_id)
        .await?
        .is_none());

    Ok(())
}
