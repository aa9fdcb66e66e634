use super::*;

/// Tests a catalog write carrying a token that does not decode.
///
/// Expected: 401 from the protected-URL gate
#[tokio::test]
async fn gate_rejects_invalid_token_on_product_create() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(
            Request::post("/api/products")
                .header(header::AUTHORIZATION, "Bearer not.a.jwt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that reads stay public even with a broken token.
///
/// Expected: 200
#[tokio::test]
async fn gate_ignores_reads() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(
            Request::get("/api/products")
                .header(header::AUTHORIZATION, "Bearer not.a.jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests creating a category as a regular user.
///
/// Expected: 403
#[tokio::test]
async fn category_create_requires_admin() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);
    let tokens = login(&app, db, "user").await;

    let response = app
        .oneshot(
            Request::post("/api/categories")
                .header(header::AUTHORIZATION, bearer(&tokens))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"category_name":"Shirts","category_description":"Tops"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Tests creating a category as an admin, then reading it back by slug.
///
/// Expected: 201, then 200 for the derived slug
#[tokio::test]
async fn admin_creates_category() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);
    let tokens = login(&app, db, "admin").await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/categories")
                .header(header::AUTHORIZATION, bearer(&tokens))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"category_name":"Summer Shirts","category_description":"Light tops"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::get("/api/categories/slug/summer-shirts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests fetching a product that does not exist.
///
/// Expected: 404 with an error body
#[tokio::test]
async fn missing_product_is_not_found() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(
            Request::get("/api/products/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = json_body(response).await;
    assert_eq!(error.error, "product not found!");
}
