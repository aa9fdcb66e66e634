use super::*;

/// Tests that lines are matched on user, product and size together.
///
/// Expected: Ok(Some) for the stored size, Ok(None) for a different size
#[tokio::test]
async fn matches_on_size() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;
    factory::cart::CartFactory::new(db, user.user_id, product.product_id)
        .size("small")
        .build()
        .await?;

    let repo = CartRepository::new(db);

    assert!(repo
        .find_line(user.user_id, product.product_id, ProductSize::Small)
        .await?
        .is_some());
    assert!(repo
        .find_line(user.user_id, product.product_id, ProductSize::Large)
        .await?
        .is_none());

    Ok(())
}
