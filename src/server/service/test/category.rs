use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::category::CreateCategoryParams, service::category::CategoryService,
};

/// Tests creating two categories with one name.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = CreateCategoryParams {
        name: "Shirts".to_string(),
        description: "Tops".to_string(),
        slug: "shirts".to_string(),
    };

    let service = CategoryService::new(db);
    service.create(params.clone()).await?;
    let result = service.create(params).await;

    assert!(
        matches!(result, Err(AppError::BadRequest(msg)) if msg == "category is already present!")
    );

    Ok(())
}

/// Tests association rules and listing products in a category.
///
/// Expected: linked product listed, duplicate link BadRequest, unknown product NotFound
#[tokio::test]
async fn associates_products() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let product = factory::create_product(db).await?;

    let service = CategoryService::new(db);
    service
        .associate(category.category_id, product.product_id)
        .await?;

    let products = service.products_in_category(category.category_id).await?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_id, product.product_id);

    assert!(matches!(
        service
            .associate(category.category_id, product.product_id)
            .await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.associate(category.category_id, 999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests removing a link that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn dissociate_missing_pair_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let product = factory::create_product(db).await?;

    let result = CategoryService::new(db)
        .dissociate(category.category_id, product.product_id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a category that still has product links.
///
/// Expected: category and links gone, product kept
#[tokio::test]
async fn delete_removes_links() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let product = factory::create_product(db).await?;
    factory::create_category_product(db, category.category_id, product.product_id).await?;

    CategoryService::new(db).delete(category.category_id).await?;

    assert_eq!(entity::prelude::Category::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CategoryProduct::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 1);

    Ok(())
}

/// Tests a category delete that fails after its links were removed.
///
/// Expected: Err, and the links restored by the rollback
#[tokio::test]
async fn failed_delete_keeps_links() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let product = factory::create_product(db).await?;
    factory::create_category_product(db, category.category_id, product.product_id).await?;
    db.execute_unprepared(
        "CREATE TRIGGER keep_category BEFORE DELETE ON category \
         BEGIN SELECT RAISE(ABORT, 'category is locked'); END;",
    )
    .await?;

    let result = CategoryService::new(db).delete(category.category_id).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(entity::prelude::CategoryProduct::find().count(db).await?, 1);

    Ok(())
}
