use super::*;

/// Tests assigning a role to a user.
///
/// Expected: Ok with membership recorded
#[tokio::test]
async fn assigns_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let role = factory::create_role(db, "Admin").await?;

    let repo = RoleRepository::new(db);
    let inserted = repo.add_user_to_role(&user.id, role.id).await?;

    assert!(inserted);
    assert!(repo.is_user_in_role(&user.id, role.id).await?);

    Ok(())
}

/// Tests assigning a pair that is already stored.
///
/// Expected: Ok(false) with the membership unchanged
#[tokio::test]
async fn skips_duplicate_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, role) = factory::helpers::create_user_with_role(db, "Admin").await?;

    let repo = RoleRepository::new(db);
    let inserted = repo.add_user_to_role(&user.id, role.id).await?;

    assert!(!inserted);
    assert_eq!(
        repo.get_role_names_for_user(&user.id).await?,
        vec!["Admin".to_string()]
    );

    Ok(())
}

/// Tests two concurrent assignments of the same pair.
///
/// Expected: both Ok and the user holds the role once
#[tokio::test]
async fn concurrent_assignments_store_one_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let role = factory::create_role(db, "Admin").await?;

    let repo = RoleRepository::new(db);
    let (a, b) = tokio::join!(
        repo.add_user_to_role(&user.id, role.id),
        repo.add_user_to_role(&user.id, role.id)
    );

    assert!(a? ^ b?);
    assert_eq!(
        repo.get_role_names_for_user(&user.id).await?,
        vec!["Admin".to_string()]
    );

    Ok(())
}
