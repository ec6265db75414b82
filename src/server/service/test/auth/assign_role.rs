use super::*;

/// Tests assigning a role the user already holds.
///
/// Expected: Ok, and the user holds the role exactly once
#[tokio::test]
async fn assign_role_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::create_user_with_email(db, "alice@example.com").await?;
    factory::create_role(db, "Admin").await?;

    let service = AuthService::new(db, &tokens);
    service.assign_role("alice@example.com", "Admin").await?;
    service.assign_role("alice@example.com", "Admin").await?;

    let role_repo = RoleRepository::new(db);
    assert_eq!(
        role_repo.get_role_names_for_user(&user.id).await?,
        vec!["Admin".to_string()]
    );

    Ok(())
}

/// Tests assigning a role to a username that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::create_role(db, "Admin").await?;

    let service = AuthService::new(db, &tokens);
    let result = service.assign_role("ghost@example.com", "Admin").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests assigning a role that does not exist.
///
/// Expected: Err(AppError::NotFound) and no assignment stored
#[tokio::test]
async fn missing_role_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::create_user_with_email(db, "alice@example.com").await?;

    let service = AuthService::new(db, &tokens);
    let result = service.assign_role("alice@example.com", "Admin").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let role_repo = RoleRepository::new(db);
    assert!(role_repo.get_role_names_for_user(&user.id).await?.is_empty());

    Ok(())
}

/// Tests two concurrent assignments of the same role.
///
/// Expected: both Ok, and the user holds the role exactly once
#[tokio::test]
async fn concurrent_assignments_both_succeed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::create_user_with_email(db, "alice@example.com").await?;
    factory::create_role(db, "Admin").await?;

    let service = AuthService::new(db, &tokens);
    let (first, second) = tokio::join!(
        service.assign_role("alice@example.com", "Admin"),
        service.assign_role("alice@example.com", "Admin")
    );
    first?;
    second?;

    let role_repo = RoleRepository::new(db);
    assert_eq!(
        role_repo.get_role_names_for_user(&user.id).await?,
        vec!["Admin".to_string()]
    );

    Ok(())
}
