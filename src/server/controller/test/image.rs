use super::*;

const BOUNDARY: &str = "ecomweb-boundary";

fn multipart_file(content_type: &str, data: &str) -> Body {
    Body::from(format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"upload.bin\"\r\n\
         Content-Type: {content_type}\r\n\
         \r\n\
         {data}\r\n\
         --{BOUNDARY}--\r\n"
    ))
}

async fn upload(app: &Router, tokens: &TokenDto, content_type: &str) -> Response {
    app.clone()
        .oneshot(
            Request::post("/api/images")
                .header(header::AUTHORIZATION, bearer(tokens))
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(multipart_file(content_type, "GIF89a"))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Tests uploading an image and downloading it again.
///
/// Expected: 201, then 200 with the original content type and bytes
#[tokio::test]
async fn uploads_and_serves_image() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Image)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);
    let tokens = login(&app, db, "user").await;

    let response = upload(&app, &tokens, "image/gif").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let image: crate::model::image::ImageDto = json_body(response).await;

    let response = app
        .oneshot(
            Request::get(format!("/api/images/{}", image.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/gif");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"GIF89a");
}

/// Tests uploading a file that is not an image.
///
/// Expected: 400 with the file type message
#[tokio::test]
async fn rejects_non_image_upload() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Image)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);
    let tokens = login(&app, db, "user").await;

    let response = upload(&app, &tokens, "text/plain").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(response).await;
    assert_eq!(error.error, "Invalid file type. Only images are allowed.");
}

/// Tests downloading an image that does not exist.
///
/// Expected: 404
#[tokio::test]
async fn missing_image_is_not_found() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Image)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(
            Request::get("/api/images/404")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
