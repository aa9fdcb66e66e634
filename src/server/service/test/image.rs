use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::image::CreateImageParams, service::image::ImageService,
};

fn upload(content_type: &str) -> CreateImageParams {
    CreateImageParams {
        filename: "shirt.png".to_string(),
        content_type: content_type.to_string(),
        data: vec![0x89, b'P', b'N', b'G'],
    }
}

/// Tests uploading an image and reading it back.
///
/// Expected: Ok(Image) with the stored bytes and content type
#[tokio::test]
async fn stores_and_fetches_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Image)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ImageService::new(db);
    let stored = service.upload(upload("image/png")).await?;
    let fetched = service.fetch(stored.id).await?;

    assert_eq!(fetched.content_type, "image/png");
    assert_eq!(fetched.data, vec![0x89, b'P', b'N', b'G']);

    Ok(())
}

/// Tests uploading a file that is not an image.
///
/// Expected: Err(AppError::BadRequest), nothing stored
#[tokio::test]
async fn rejects_non_image_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Image)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ImageService::new(db).upload(upload("text/plain")).await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Invalid file type. Only images are allowed."
    ));

    Ok(())
}

/// Tests fetching an image that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fetch_missing_image_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Image)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_image(db).await?;

    let result = ImageService::new(db).fetch(existing.id + 1).await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(msg)) if msg == "image not found!"
    ));

    Ok(())
}
