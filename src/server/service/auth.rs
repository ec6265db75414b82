use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthToken, LoginParams, RegisterParams},
        user::{CreateUserParams, User},
    },
    service::{password::PasswordService, token::TokenService},
};

/// Service for account registration, login and role management.
///
/// Orchestrates the user and role repositories with password hashing and token
/// issuing. Registration stores the email as the username; role assignment looks users
/// up by that username.
pub struct AuthService<'a> {
    /// Database connection for user and role operations.
    pub db: &'a DatabaseConnection,
    /// Token service used to sign tokens on login.
    pub tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Reference to the token service
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account.
    ///
    /// Rejects emails that already have an account, then checks the password policy and
    /// reports every violated rule at once. A concurrent registration of the same email
    /// that wins the insert also yields `UserExists`.
    ///
    /// # Arguments
    /// - `params` - Email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::AuthErr(UserExists))` - Email already registered
    /// - `Err(AppError::BadRequest)` - Password violates the policy
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.exists_by_email(&params.email).await? {
            return Err(AuthError::UserExists.into());
        }

        let violations = PasswordService::validate(&params.password);
        if !violations.is_empty() {
            return Err(AppError::BadRequest(violations.join(" ")));
        }

        let password = params.password;
        let password_hash =
            tokio::task::spawn_blocking(move || PasswordService::hash(&password)).await??;

        let user = user_repo
            .create(CreateUserParams {
                username: params.email.clone(),
                email: params.email,
                password_hash,
            })
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::from(AuthError::UserExists),
                _ => AppError::from(e),
            })?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Authenticates with email and password and issues a bearer token.
    ///
    /// # Arguments
    /// - `params` - Email and plaintext password
    ///
    /// # Returns
    /// - `Ok(AuthToken)` - User identity plus signed token
    /// - `Err(AppError::AuthErr(UserNotFound))` - No account with that email
    /// - `Err(AppError::AuthErr(BadCredentials))` - Password does not match
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, params: LoginParams) -> Result<AuthToken, AppError> {
        let user_repo = UserRepository::new(self.db);
        let role_repo = RoleRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(&params.email).await? else {
            tracing::warn!("Login attempt for unknown email");
            return Err(AuthError::UserNotFound.into());
        };

        let password = params.password;
        let password_hash = credentials.password_hash;
        let verified =
            tokio::task::spawn_blocking(move || PasswordService::verify(&password, &password_hash))
                .await??;

        if !verified {
            tracing::warn!("Login attempt with bad password for user {}", credentials.user.id);
            return Err(AuthError::BadCredentials.into());
        }

        let user = credentials.user;
        let roles = role_repo.get_role_names_for_user(&user.id).await?;
        let token = self.tokens.issue(&user, roles)?;

        Ok(AuthToken {
            user_id: user.id,
            username: user.username,
            email: user.email,
            token,
        })
    }

    /// Creates a role if it does not exist yet.
    pub async fn create_role(&self, role_name: &str) -> Result<(), AppError> {
        let role_repo = RoleRepository::new(self.db);

        if role_repo.exists(role_name).await? {
            return Ok(());
        }

        if role_repo.create(role_name).await? {
            tracing::info!("Created role {}", role_name);
        }

        Ok(())
    }

    /// Assigns a role to the user with the given username.
    ///
    /// Assigning a role the user already holds is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - User holds the role
    /// - `Err(AppError::NotFound)` - Username or role does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn assign_role(&self, username: &str, role_name: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let role_repo = RoleRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AppError::NotFound(format!(
                "User with username '{}' not found.",
                username
            )));
        };

        let Some(role) = role_repo.find_by_name(role_name).await? else {
            return Err(AppError::NotFound(format!(
                "Role '{}' does not exist.",
                role_name
            )));
        };

        if role_repo.is_user_in_role(&user.id, role.id).await? {
            return Ok(());
        }

        if role_repo.add_user_to_role(&user.id, role.id).await? {
            tracing::info!("Assigned role {} to user {}", role.name, user.id);
        }

        Ok(())
    }
}
