use super::*;

/// Tests creating a user.
///
/// Verifies that the repository stores every field and returns the user with its
/// generated id and parsed role.
///
/// Expected: Ok(User) with matching fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_params("ada", UserRole::User)).await?;

    assert!(user.user_id > 0);
    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.password_hash, "$2b$04$hash");
    assert_eq!(user.role, UserRole::User);

    Ok(())
}

/// Tests the unique constraint on usernames.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("ada", UserRole::User)).await?;

    let mut duplicate = create_params("ada", UserRole::User);
    duplicate.email = "other@example.com".to_string();
    let result = repo.create(duplicate).await;

    assert!(result.is_err());

    Ok(())
}
