use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting a category removes its product links but keeps the products.
///
/// Expected: Ok(1), no links left, product still present
#[tokio::test]
async fn deletes_category_and_links() -> Result<(), DbErr> {
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
    let deleted = repo.delete(category.category_id).await?;

    assert_eq!(deleted, 1);
    assert_eq!(
        entity::prelude::CategoryProduct::find().count(db).await?,
        0
    );
    assert!(entity::prelude::Product::find_by_id(product.product_id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
