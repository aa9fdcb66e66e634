use super::*;

/// Tests creating a product linked to an image.
///
/// Expected: Ok(Product) referencing the image
#[tokio::test]
async fn creates_product_with_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let image = factory::create_image(db).await?;

    let repo = ProductRepository::new(db);
    let product = repo
        .create(CreateProductParams {
            name: "Linen Shirt".to_string(),
            description: "Breathable".to_string(),
            price: 2500,
            slug: "linen-shirt".to_string(),
            image_id: Some(image.id),
        })
        .await?;

    assert_eq!(product.name, "Linen Shirt");
    assert_eq!(product.price, 2500);
    assert_eq!(product.image_id, Some(image.id));

    Ok(())
}

/// Tests the unique constraint on product names.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::ProductFactory::new(db)
        .name("Linen Shirt")
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let result = repo
        .create(CreateProductParams {
            name: "Linen Shirt".to_string(),
            description: "Copy".to_string(),
            price: 100,
            slug: "linen-shirt-2".to_string(),
            image_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
