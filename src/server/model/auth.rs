//! Authentication parameters and results.

use crate::model::auth::{AuthenticationRequestDto, AuthenticationResponseDto, RegistrationDto};

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegistrationDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for logging in with email and password.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: AuthenticationRequestDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    pub user_id: String,
    pub username: String,
    pub email: String,
    /// Signed bearer token.
    pub token: String,
}

impl AuthToken {
    pub fn into_dto(self) -> AuthenticationResponseDto {
        AuthenticationResponseDto {
            user_id: self.user_id,
            username: self.username,
            email: self.email,
            token: self.token,
        }
    }
}
