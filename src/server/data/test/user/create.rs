use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the user with a generated id and returns the
/// domain model without the password hash.
///
/// Expected: Ok with the user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "patient@example.com".to_string(),
            username: "patient@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert!(!user.id.is_empty());
    assert_eq!(user.email, "patient@example.com");
    assert_eq!(user.username, "patient@example.com");

    Ok(())
}

/// Tests that a second user with the same email is rejected by the unique index.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "dup@example.com").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            email: "dup@example.com".to_string(),
            username: "someone-else".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
