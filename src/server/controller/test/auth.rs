use super::*;

/// Tests that logging in sets both token cookies as HttpOnly.
///
/// Expected: 200 with two Set-Cookie headers
#[tokio::test]
async fn login_sets_token_cookies() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("alice")
        .password(bcrypt::hash("secret", 4).unwrap())
        .build()
        .await
        .unwrap();

    let response = app(db)
        .oneshot(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=alice&password=secret"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookies: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("access_token=")));
    assert!(cookies.iter().any(|c| c.starts_with("refresh_token=")));
    assert!(cookies.iter().all(|c| c.contains("HttpOnly")));

    let tokens: TokenDto = json_body(response).await;
    assert_eq!(tokens.token_type, "bearer");
    assert!(tokens.refresh_token.is_some());
}

/// Tests logging in with the wrong password.
///
/// Expected: 401
#[tokio::test]
async fn login_rejects_wrong_password() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("alice")
        .password(bcrypt::hash("secret", 4).unwrap())
        .build()
        .await
        .unwrap();

    let response = app(db)
        .oneshot(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=alice&password=wrong"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that the access token cookie alone authenticates a request.
///
/// Expected: 200 for GET /api/auth/user
#[tokio::test]
async fn current_user_accepts_cookie_token() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);
    let tokens = login(&app, db, "user").await;

    let response = app
        .oneshot(
            Request::get("/api/auth/user")
                .header(
                    header::COOKIE,
                    format!("access_token={}", tokens.access_token),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests presenting a refresh token where an access token is expected.
///
/// Expected: 401
#[tokio::test]
async fn current_user_rejects_refresh_token() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);
    let tokens = login(&app, db, "user").await;

    let response = app
        .oneshot(
            Request::get("/api/auth/user")
                .header(
                    header::AUTHORIZATION,
                    format!("Bearer {}", tokens.refresh_token.unwrap()),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 with the product routes listed
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(
            Request::get("/api/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = json_body(response).await;
    assert!(doc["paths"]["/api/products"].is_object());
}

/// Tests logging out with both token cookies present.
///
/// Expected: 200 and both cookies removed
#[tokio::test]
async fn logout_clears_cookies() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);
    let tokens = login(&app, db, "user").await;

    let response = app
        .oneshot(
            Request::post("/api/auth/logout")
                .header(
                    header::COOKIE,
                    format!(
                        "access_token={}; refresh_token={}",
                        tokens.access_token,
                        tokens.refresh_token.unwrap()
                    ),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let removed = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter(|value| {
            let value = value.to_str().unwrap();
            (value.starts_with("access_token=") || value.starts_with("refresh_token="))
                && value.contains("Max-Age=0")
        })
        .count();
    assert_eq!(removed, 2);
}

/// Tests logging out with a bearer token but no refresh cookie.
///
/// Expected: 404 "Token not found"
#[tokio::test]
async fn logout_without_cookies_is_not_found() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);
    let tokens = login(&app, db, "user").await;

    let response = app
        .oneshot(
            Request::post("/api/auth/logout")
                .header(header::AUTHORIZATION, bearer(&tokens))
                .header(
                    header::COOKIE,
                    format!("access_token={}", tokens.access_token),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = json_body(response).await;
    assert_eq!(error.error, "Token not found");
}
