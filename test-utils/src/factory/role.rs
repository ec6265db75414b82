//! Role factory for creating roles and user-role assignments.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a role with the given name.
///
/// # Returns
/// - `Ok(entity::role::Model)` - Created role entity
/// - `Err(DbErr)` - Database error during insert (including duplicate names)
pub async fn create_role(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Assigns an existing role to an existing user.
///
/// # Returns
/// - `Ok(entity::user_role::Model)` - Created assignment
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_role(
    db: &DatabaseConnection,
    user_id: &str,
    role_id: i32,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        role_id: ActiveValue::Set(role_id),
    }
    .insert(db)
    .await
}
