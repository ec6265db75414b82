use super::*;

/// Tests membership checks for assigned and unassigned roles.
///
/// Expected: true for the assigned role, false for the other
#[tokio::test]
async fn reports_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, admin) = factory::helpers::create_user_with_role(db, "Admin").await?;
    let receptionist = factory::create_role(db, "Receptionist").await?;

    let repo = RoleRepository::new(db);

    assert!(repo.is_user_in_role(&user.id, admin.id).await?);
    assert!(!repo.is_user_in_role(&user.id, receptionist.id).await?);

    Ok(())
}
