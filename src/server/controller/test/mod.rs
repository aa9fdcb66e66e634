use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use crate::{
    model::{api::ErrorDto, auth::TokenDto},
    server::{config::Config, router::router, state::AppState},
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod catalog;
mod image;

fn app(db: &DatabaseConnection) -> Router {
    router(AppState::new(db.clone(), &Config::for_test()))
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Creates a user with password `secret` and logs them in through the API.
async fn login(app: &Router, db: &DatabaseConnection, role: &str) -> TokenDto {
    let user = factory::user::UserFactory::new(db)
        .password(bcrypt::hash("secret", 4).unwrap())
        .role(role)
        .build()
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!(
                    "username={}&password=secret",
                    user.username
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    json_body(response).await
}

fn bearer(token: &TokenDto) -> String {
    format!("Bearer {}", token.access_token)
}
