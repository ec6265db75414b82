//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and assigns it a role with the given name.
///
/// The role is created as part of the call, so the name must not already exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_name` - Name of the role to create and assign
///
/// # Returns
/// - `Ok((user, role))` - The created user and role
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role_name: &str,
) -> Result<(entity::user::Model, entity::role::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let role = crate::factory::role::create_role(db, role_name).await?;
    crate::factory::role::create_user_role(db, &user.id, role.id).await?;

    Ok((user, role))
}
