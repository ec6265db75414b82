//! Appointment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::appointment::{AppointmentDto, AppointmentResponseDto};

/// A scheduled dental appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    /// Database-assigned identity; never changes after creation.
    pub id: i32,
    pub patient_name: String,
    pub date: DateTime<Utc>,
    pub dentist: String,
    pub procedure: String,
}

impl Appointment {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::appointment::Model) -> Self {
        Self {
            id: entity.id,
            patient_name: entity.patient_name,
            date: entity.date,
            dentist: entity.dentist,
            procedure: entity.procedure,
        }
    }

    /// Converts the domain model to the DTO returned by every read endpoint.
    pub fn into_dto(self) -> AppointmentResponseDto {
        AppointmentResponseDto {
            id: self.id,
            patient_name: self.patient_name,
            date: self.date,
            dentist: self.dentist,
            procedure: self.procedure,
        }
    }
}

/// Parameters for creating an appointment.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub patient_name: String,
    pub date: DateTime<Utc>,
    pub dentist: String,
    pub procedure: String,
}

impl CreateAppointmentParams {
    pub fn from_dto(dto: AppointmentDto) -> Self {
        Self {
            patient_name: dto.patient_name,
            date: dto.date,
            dentist: dto.dentist,
            procedure: dto.procedure,
        }
    }
}

/// Parameters for overwriting every field of an existing appointment.
#[derive(Debug, Clone)]
pub struct UpdateAppointmentParams {
    /// Identity of the appointment to overwrite.
    pub id: i32,
    pub patient_name: String,
    pub date: DateTime<Utc>,
    pub dentist: String,
    pub procedure: String,
}

impl UpdateAppointmentParams {
    pub fn from_dto(id: i32, dto: AppointmentDto) -> Self {
        Self {
            id,
            patient_name: dto.patient_name,
            date: dto.date,
            dentist: dto.dentist,
            procedure: dto.procedure,
        }
    }
}
