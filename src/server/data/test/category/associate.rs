use super::*;

/// Tests linking products to a category and listing the linked product ids.
///
/// Expected: Ok(Vec<i32>) holding only the linked product
#[tokio::test]
async fn lists_linked_product_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let linked = factory::create_product(db).await?;
    factory::create_product(db).await?;

    let repo = CategoryRepository::new(db);
    repo.associate(category.category_id, linked.product_id)
        .await?;

    let product_ids = repo.get_product_ids(category.category_id).await?;

    assert_eq!(product_ids, vec![linked.product_id]);
    assert!(repo
        .find_association(category.category_id, linked.product_id)
        .await?
        .is_some());

    Ok(())
}

/// Tests that a pair can only be linked once.
///
/// Expected: Err(DbErr) from the composite primary key
#[tokio::test]
async fn fails_for_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let product = factory::create_product(db).await?;

    let repo = CategoryRepository::new(db);
    repo.associate(category.category_id, product.product_id)
        .await?;
    let result = repo
        .associate(category.category_id, product.product_id)
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests removing a link.
///
/// Expected: Ok(1) then Ok(0) for the already removed pair
#[tokio::test]
async fn dissociates_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let product = factory::create_product(db).await?;
    factory::create_category_product(db, category.category_id, product.product_id).await?;

    let repo = CategoryRepository::new(db);

    assert_eq!(
        repo.dissociate(category.category_id, product.product_id)
            .await?,
        1
    );
    assert_eq!(
        repo.dissociate(category.category_id, product.product_id)
            .await?,
        0
    );

    Ok(())
}
