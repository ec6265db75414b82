use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature, issuer or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token subject refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(String),

    /// User is authenticated but lacks a required role.
    ///
    /// Results in a 403 Forbidden response. The message is logged and never sent to
    /// the client.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),

    /// Registration attempted with an email that already has an account.
    ///
    /// Results in a 400 Bad Request response.
    #[error("User Exists")]
    UserExists,

    /// Login attempted with an email that has no account.
    ///
    /// Results in a 400 Bad Request response.
    #[error("User Not Found")]
    UserNotFound,

    /// Login attempted with a wrong password.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Bad Credentials")]
    BadCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `UserExists` / `UserNotFound` / `BadCredentials` → 400 Bad Request
///
/// Token and access failures are logged at debug level; the client only sees a generic
/// message so token contents and user ids are not echoed back.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Insufficient permissions".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserExists | Self::UserNotFound | Self::BadCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
