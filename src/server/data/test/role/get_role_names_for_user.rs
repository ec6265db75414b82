use super::*;

/// Tests listing role names held by a user.
///
/// Expected: Ok with only the user's roles, sorted by name
#[tokio::test]
async fn lists_assigned_roles_sorted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let receptionist = factory::create_role(db, "Receptionist").await?;
    let admin = factory::create_role(db, "Admin").await?;
    let dentist = factory::create_role(db, "Dentist").await?;

    factory::create_user_role(db, &user.id, receptionist.id).await?;
    factory::create_user_role(db, &user.id, admin.id).await?;
    factory::create_user_role(db, &other.id, dentist.id).await?;

    let repo = RoleRepository::new(db);
    let names = repo.get_role_names_for_user(&user.id).await?;

    assert_eq!(names, vec!["Admin".to_string(), "Receptionist".to_string()]);

    Ok(())
}

/// Tests listing roles for a user without any.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_user_without_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = RoleRepository::new(db);
    let names = repo.get_role_names_for_user(&user.id).await?;

    assert!(names.is_empty());

    Ok(())
}
