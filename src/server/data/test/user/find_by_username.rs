use super::*;

/// Tests finding a user by username.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("grace")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("grace").await?;

    assert_eq!(found.map(|u| u.user_id), Some(created.user_id));

    Ok(())
}

/// Tests looking up a username that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a row with an unknown role surfaces as an error rather than a user.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_for_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("mallory")
        .role("superuser")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_username("mallory").await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
