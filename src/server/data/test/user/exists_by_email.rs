use super::*;

/// Tests the email existence check before and after a user is created.
///
/// Expected: false, then true
#[tokio::test]
async fn reflects_registered_emails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.exists_by_email("new@example.com").await?);

    factory::user::create_user_with_email(db, "new@example.com").await?;

    assert!(repo.exists_by_email("new@example.com").await?);

    Ok(())
}
