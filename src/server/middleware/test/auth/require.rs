use super::*;

/// Tests a request without any token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let token = AccessToken(None);

    let result = AuthGuard::new(db, &jwt, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token that is not a JWT.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_for_garbage_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let token = AccessToken(Some("not.a.jwt".to_string()));

    let result = AuthGuard::new(db, &jwt, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests an authenticated regular user without permission requirements.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_authenticated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = factory::create_user(db).await?;
    let token = AccessToken(Some(jwt.encode_access(&user.username)?));

    let guarded = AuthGuard::new(db, &jwt, &token).require(&[]).await?;

    assert_eq!(guarded.user_id, user.user_id);

    Ok(())
}

/// Tests the admin permission for a regular user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = factory::create_user(db).await?;
    let token = AccessToken(Some(jwt.encode_access(&user.username)?));

    let result = AuthGuard::new(db, &jwt, &token)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

/// Tests the admin permission for an admin.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_admin_permission_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let admin = factory::create_admin(db).await?;
    let token = AccessToken(Some(jwt.encode_access(&admin.username)?));

    let guarded = AuthGuard::new(db, &jwt, &token)
        .require(&[Permission::Admin])
        .await?;

    assert!(guarded.is_admin());

    Ok(())
}
