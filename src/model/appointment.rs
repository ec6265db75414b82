use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Appointment fields accepted when creating or updating an appointment.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub patient_name: String,
    pub date: DateTime<Utc>,
    pub dentist: String,
    pub procedure: String,
}

/// Appointment as returned by every read endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponseDto {
    pub id: i32,
    pub patient_name: String,
    pub date: DateTime<Utc>,
    pub dentist: String,
    pub procedure: String,
}
