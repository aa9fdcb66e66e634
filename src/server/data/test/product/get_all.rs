use super::*;

/// Tests listing products.
///
/// Expected: Ok(Vec<Product>) ordered by id
#[tokio::test]
async fn returns_products_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_product(db).await?;
    let second = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let products = repo.get_all().await?;

    let ids: Vec<i32> = products.iter().map(|p| p.product_id).collect();
    assert_eq!(ids, vec![first.product_id, second.product_id]);

    Ok(())
}

/// Tests fetching a subset of products by id.
///
/// Expected: Ok(Vec<Product>) containing only the requested products
#[tokio::test]
async fn returns_only_requested_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_product(db).await?;
    let wanted = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let products = repo.get_by_ids(vec![wanted.product_id]).await?;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_id, wanted.product_id);
    assert!(repo.get_by_ids(Vec::new()).await?.is_empty());

    Ok(())
}
