use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok(User) with the new email and the old username
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            created.user_id,
            UpdateUserParams {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.username, created.username);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(999, UpdateUserParams::default()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
