//! User domain models and parameters.
//!
//! Users are identified by a UUID string and log in with their email. Registration sets
//! the username to the email, and role assignment looks users up by username.

use chrono::{DateTime, Utc};

/// Registered user without credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            created_at: entity.created_at,
        }
    }
}

/// User together with the stored password hash.
///
/// Only returned by the credential lookup used during login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    /// Argon2 PHC-format hash string.
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    /// Already-hashed password; plaintext never reaches the data layer.
    pub password_hash: String,
}
