use super::*;

/// Tests deleting a user.
///
/// Expected: Ok(1) and the user is gone
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(created.user_id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(created.user_id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.delete(42).await?, 0);

    Ok(())
}
