use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        appointment::{AppointmentDto, AppointmentResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::appointment::{Appointment, CreateAppointmentParams, UpdateAppointmentParams},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

fn into_dtos(appointments: Vec<Appointment>) -> Vec<AppointmentResponseDto> {
    appointments.into_iter().map(Appointment::into_dto).collect()
}

/// Create a new appointment.
///
/// # Access Control
/// - `Admin` - Only users holding the Admin role can create appointments
///
/// # Returns
/// - `200 OK` - The created appointment with its assigned id
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - User lacks the Admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/Appointment",
    tag = APPOINTMENT_TAG,
    request_body = AppointmentDto,
    responses(
        (status = 200, description = "Successfully created appointment", body = AppointmentResponseDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User lacks the Admin role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = AppointmentService::new(&state.db, &state.cache);

    let appointment = service
        .create(CreateAppointmentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Get an appointment by id.
///
/// # Returns
/// - `200 OK` - Appointment details
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No appointment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/Appointment/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved appointment", body = AppointmentResponseDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = AppointmentService::new(&state.db, &state.cache);

    let Some(appointment) = service.get_by_id(id).await? else {
        return Err(AppError::NotFound(format!("Appointment {} not found", id)));
    };

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Get all appointments in creation order.
#[utoipa::path(
    get,
    path = "/api/Appointment",
    tag = APPOINTMENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved appointments", body = Vec<AppointmentResponseDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_all_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = AppointmentService::new(&state.db, &state.cache);

    let appointments = service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(appointments))))
}

/// Get every appointment whose patient name matches exactly.
#[utoipa::path(
    get,
    path = "/byPatients/{patientName}",
    tag = APPOINTMENT_TAG,
    params(
        ("patientName" = String, Path, description = "Patient name to match")
    ),
    responses(
        (status = 200, description = "Matching appointments, possibly empty", body = Vec<AppointmentResponseDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_appointments_by_patient_name(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(patient_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = AppointmentService::new(&state.db, &state.cache);

    let appointments = service.get_by_patient_name(&patient_name).await?;

    Ok((StatusCode::OK, Json(into_dtos(appointments))))
}

/// Get every appointment with the given dentist.
#[utoipa::path(
    get,
    path = "/byDentist/{dentist}",
    tag = APPOINTMENT_TAG,
    params(
        ("dentist" = String, Path, description = "Dentist name to match")
    ),
    responses(
        (status = 200, description = "Matching appointments, possibly empty", body = Vec<AppointmentResponseDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_appointments_by_dentist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(dentist): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = AppointmentService::new(&state.db, &state.cache);

    let appointments = service.get_by_dentist(&dentist).await?;

    Ok((StatusCode::OK, Json(into_dtos(appointments))))
}

/// Overwrite an appointment.
///
/// Updating an id that does not exist succeeds without changing anything.
///
/// # Returns
/// - `200 OK` - Appointment updated, or no appointment with that id
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/Appointment/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    request_body = AppointmentDto,
    responses(
        (status = 200, description = "Appointment updated"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<AppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = AppointmentService::new(&state.db, &state.cache);

    service
        .update(UpdateAppointmentParams::from_dto(id, payload))
        .await?;

    Ok(StatusCode::OK)
}

/// Delete an appointment.
///
/// Deleting an id that does not exist succeeds without changing anything.
///
/// # Returns
/// - `200 OK` - Appointment deleted, or no appointment with that id
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/Appointment/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = AppointmentService::new(&state.db, &state.cache);

    service.delete(id).await?;

    Ok(StatusCode::OK)
}
