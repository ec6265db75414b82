use std::time::Duration;

use crate::server::{
    data::appointment::AppointmentRepository,
    error::AppError,
    model::appointment::{CreateAppointmentParams, UpdateAppointmentParams},
    service::{appointment::AppointmentService, cache::AppointmentCache},
};
use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod get_lists;

fn cache() -> AppointmentCache {
    AppointmentCache::new(Duration::from_secs(60), 1_000)
}

fn params(patient_name: &str, dentist: &str) -> CreateAppointmentParams {
    CreateAppointmentParams {
        patient_name: patient_name.to_string(),
        date: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        dentist: dentist.to_string(),
        procedure: "Cleaning".to_string(),
    }
}
