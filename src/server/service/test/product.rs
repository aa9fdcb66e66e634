use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::product::{CreateProductParams, UpdateProductParams},
    service::product::ProductService,
};

fn params(name: &str) -> CreateProductParams {
    CreateProductParams {
        name: name.to_string(),
        description: "Soft cotton".to_string(),
        price: 1500,
        slug: "tee".to_string(),
        image_id: None,
    }
}

/// Tests product creation rules.
///
/// Expected: duplicate name is BadRequest, unknown image is NotFound
#[tokio::test]
async fn create_validates_name_and_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProductService::new(db);
    service.create(params("Tee")).await?;

    let duplicate = service.create(params("Tee")).await;
    let missing_image = service
        .create(CreateProductParams {
            image_id: Some(42),
            ..params("Hoodie")
        })
        .await;

    assert!(
        matches!(duplicate, Err(AppError::BadRequest(msg)) if msg == "product is already present!")
    );
    assert!(matches!(missing_image, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests renaming a product to a name already in use.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn update_keeps_names_unique() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProductService::new(db);
    service.create(params("Tee")).await?;
    let hoodie = service.create(params("Hoodie")).await?;

    let result = service
        .update(
            hoodie.product_id,
            UpdateProductParams {
                name: Some("Tee".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting a product that is referenced everywhere.
///
/// Expected: product, carts, order items, reviews and category links removed
#[tokio::test]
async fn delete_removes_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, _order) = factory::helpers::create_order_with_dependencies(db).await?;
    let category = factory::create_category(db).await?;
    factory::create_category_product(db, category.category_id, product.product_id).await?;
    factory::create_cart(db, user.user_id, product.product_id).await?;
    factory::create_review(db, product.product_id, user.user_id).await?;

    let service = ProductService::new(db);
    service.delete(product.product_id).await?;

    assert_eq!(entity::prelude::Product::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Cart::find().count(db).await?, 0);
    assert_eq!(entity::prelude::OrderItem::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Review::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CategoryProduct::find().count(db).await?, 0);
    assert!(matches!(
        service.delete(product.product_id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests negative prices on create and update.
///
/// Expected: Err(AppError::BadRequest) for both, stored price unchanged
#[tokio::test]
async fn rejects_negative_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProductService::new(db);
    let created = service
        .create(CreateProductParams {
            price: -1,
            ..params("Tee")
        })
        .await;
    let product = service.create(params("Hoodie")).await?;
    let updated = service
        .update(
            product.product_id,
            UpdateProductParams {
                price: Some(-500),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(created, Err(AppError::BadRequest(_))));
    assert!(matches!(updated, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_by_id(product.product_id).await?.price, 1500);

    Ok(())
}
