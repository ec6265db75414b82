//! Role data repository for database operations.
//!
//! This module provides the `RoleRepository` for managing named roles and the user-role
//! assignments used by the authorization guard.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for roles and role assignments.
pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    /// Creates a new RoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RoleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a role unless one with this name already exists.
    ///
    /// Concurrent calls with the same name are safe; the unique index on the name
    /// resolves the race and the losing insert is skipped.
    ///
    /// # Returns
    /// - `Ok(true)` - The role was created
    /// - `Ok(false)` - A role with this name already existed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, name: &str) -> Result<bool, DbErr> {
        let role = entity::role::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        let inserted = entity::prelude::Role::insert(role)
            .on_conflict(
                OnConflict::column(entity::role::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    /// Finds a role by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Checks whether a role with this name exists.
    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the user already holds the role.
    pub async fn is_user_in_role(&self, user_id: &str, role_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::RoleId.eq(role_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Assigns a role to a user.
    ///
    /// An existing assignment is left in place, so concurrent assignments of the same
    /// pair both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - Assignment stored
    /// - `Ok(false)` - The user already held the role
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add_user_to_role(&self, user_id: &str, role_id: i32) -> Result<bool, DbErr> {
        let assignment = entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            role_id: ActiveValue::Set(role_id),
        };

        let inserted = entity::prelude::UserRole::insert(assignment)
            .on_conflict(
                OnConflict::columns([
                    entity::user_role::Column::UserId,
                    entity::user_role::Column::RoleId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    /// Gets the names of every role held by the user, ordered by name.
    pub async fn get_role_names_for_user(&self, user_id: &str) -> Result<Vec<String>, DbErr> {
        let roles = entity::prelude::Role::find()
            .inner_join(entity::prelude::UserRole)
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        Ok(roles.into_iter().map(|role| role.name).collect())
    }
}
