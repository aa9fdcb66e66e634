use super::*;

/// Tests a partial product update.
///
/// Expected: Ok(Product) with the new price and the old name
#[tokio::test]
async fn updates_price_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(
            created.product_id,
            UpdateProductParams {
                price: Some(4200),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.price, 4200);
    assert_eq!(updated.name, created.product_name);

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo.update(7, UpdateProductParams::default()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
