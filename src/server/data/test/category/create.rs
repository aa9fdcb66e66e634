use super::*;

/// Tests creating a category and finding it by slug.
///
/// Expected: Ok(Some(Category)) with the same id
#[tokio::test]
async fn creates_category_findable_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let created = repo
        .create(CreateCategoryParams {
            name: "Shirts".to_string(),
            description: "Tops with sleeves".to_string(),
            slug: "shirts".to_string(),
        })
        .await?;

    let found = repo.find_by_slug("shirts").await?;

    assert_eq!(found.map(|c| c.category_id), Some(created.category_id));

    Ok(())
}
