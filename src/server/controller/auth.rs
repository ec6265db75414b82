use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthenticationRequestDto, AuthenticationResponseDto, RegistrationDto},
    },
    server::{
        error::AppError,
        model::auth::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "authentication";

/// Query parameters for creating a role.
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateRoleParams {
    /// Name of the role to create.
    pub role_name: String,
}

/// Query parameters for assigning a role to a user.
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AssignRoleParams {
    /// Username of the user receiving the role.
    pub username: String,
    /// Name of an existing role.
    pub role_name: String,
}

/// Register a new account.
///
/// The username of the new account is its email.
///
/// # Returns
/// - `200 OK` - Account created
/// - `400 Bad Request` - Email already registered, or password violates the policy
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/Authentication/register",
    tag = AUTH_TAG,
    request_body = RegistrationDto,
    responses(
        (status = 200, description = "User created", body = String),
        (status = 400, description = "User exists or password rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    service.register(RegisterParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, "User Created Successfully"))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - User identity and bearer token
/// - `400 Bad Request` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/api/Authentication/login",
    tag = AUTH_TAG,
    request_body = AuthenticationRequestDto,
    responses(
        (status = 200, description = "Authenticated", body = AuthenticationResponseDto),
        (status = 400, description = "User not found or bad credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<AuthenticationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let auth = service.login(LoginParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(auth.into_dto())))
}

/// Create a role if it does not exist yet.
#[utoipa::path(
    post,
    path = "/api/Authentication/role",
    tag = AUTH_TAG,
    params(CreateRoleParams),
    responses(
        (status = 200, description = "Role exists"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    Query(params): Query<CreateRoleParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    service.create_role(&params.role_name).await?;

    Ok(StatusCode::OK)
}

/// Assign an existing role to a user.
///
/// Assigning a role the user already holds succeeds without changes.
///
/// # Returns
/// - `200 OK` - User holds the role
/// - `404 Not Found` - Username or role does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/Authentication/assign",
    tag = AUTH_TAG,
    params(AssignRoleParams),
    responses(
        (status = 200, description = "Role assigned"),
        (status = 404, description = "User or role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_role(
    State(state): State<AppState>,
    Query(params): Query<AssignRoleParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    service
        .assign_role(&params.username, &params.role_name)
        .await?;

    Ok(StatusCode::OK)
}
