use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

/// Name of the role allowed to create appointments.
pub const ADMIN_ROLE: &str = "Admin";

pub enum Permission {
    Admin,
}

/// Authenticates a request from its bearer token and checks role requirements.
///
/// Roles are read from the database on every check, so an assignment made after the
/// token was issued takes effect immediately.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires a valid bearer token and every listed permission.
    ///
    /// An empty permission list only requires authentication.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No usable `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Token failed validation
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::AccessDenied)` - User lacks a required role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let role_repo = RoleRepository::new(self.db);

        let Some(token) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self
            .tokens
            .validate(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let Some(user) = user_repo.find_by_id(&claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let roles = role_repo.get_role_names_for_user(&user.id).await?;
                    if !roles.iter().any(|role| role == ADMIN_ROLE) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User lacks the {} role", ADMIN_ROLE),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Option<&str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ")?.trim();

        (!token.is_empty()).then_some(token)
    }
}
