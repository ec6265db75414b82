//! Appointment factory for creating test appointment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::appointment::AppointmentFactory;
///
/// let appointment = AppointmentFactory::new(&db)
///     .patient_name("Jane Doe")
///     .procedure("Filling")
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    patient_name: String,
    date: DateTime<Utc>,
    dentist: String,
    procedure: String,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - patient_name: `"Patient {id}"`
    /// - date: one day from now
    /// - dentist: `"Dr. Dentist {id}"`
    /// - procedure: `"Cleaning"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            patient_name: format!("Patient {}", id),
            date: Utc::now() + Duration::days(1),
            dentist: format!("Dr. Dentist {}", id),
            procedure: "Cleaning".to_string(),
        }
    }

    pub fn patient_name(mut self, patient_name: impl Into<String>) -> Self {
        self.patient_name = patient_name.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn dentist(mut self, dentist: impl Into<String>) -> Self {
        self.dentist = dentist.into();
        self
    }

    pub fn procedure(mut self, procedure: impl Into<String>) -> Self {
        self.procedure = procedure.into();
        self
    }

    /// Builds and inserts the appointment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            patient_name: ActiveValue::Set(self.patient_name),
            date: ActiveValue::Set(self.date),
            dentist: ActiveValue::Set(self.dentist),
            procedure: ActiveValue::Set(self.procedure),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an appointment with default values.
///
/// Shorthand for `AppointmentFactory::new(db).build().await`.
pub async fn create_appointment(
    db: &DatabaseConnection,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db).build().await
}
