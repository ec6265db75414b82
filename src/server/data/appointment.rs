//! Appointment data repository for database operations.
//!
//! This module provides the `AppointmentRepository` for managing appointment records. Every
//! operation is a single query or mutation; lookups and writes against a missing id return
//! `None`/`false` instead of an error.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::appointment::{
    Appointment, CreateAppointmentParams, UpdateAppointmentParams,
};

/// Repository providing database operations for appointments.
pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    /// Creates a new AppointmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AppointmentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new appointment.
    ///
    /// # Arguments
    /// - `params` - Patient name, date, dentist and procedure
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The inserted appointment with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, DbErr> {
        let entity = entity::appointment::ActiveModel {
            patient_name: ActiveValue::Set(params.patient_name),
            date: ActiveValue::Set(params.date),
            dentist: ActiveValue::Set(params.dentist),
            procedure: ActiveValue::Set(params.procedure),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Appointment::from_entity(entity))
    }

    /// Finds an appointment by id.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - Appointment found
    /// - `Ok(None)` - No appointment with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, DbErr> {
        let entity = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Appointment::from_entity))
    }

    /// Gets every appointment in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Appointment>, DbErr> {
        let entities = entity::prelude::Appointment::find()
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Appointment::from_entity).collect())
    }

    /// Gets all appointments whose patient name matches exactly, in insertion order.
    pub async fn get_by_patient_name(
        &self,
        patient_name: &str,
    ) -> Result<Vec<Appointment>, DbErr> {
        let entities = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::PatientName.eq(patient_name))
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Appointment::from_entity).collect())
    }

    /// Gets all appointments with the given dentist, in insertion order.
    pub async fn get_by_dentist(&self, dentist: &str) -> Result<Vec<Appointment>, DbErr> {
        let entities = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::Dentist.eq(dentist))
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Appointment::from_entity).collect())
    }

    /// Overwrites every field of an existing appointment.
    ///
    /// # Arguments
    /// - `params` - Id of the appointment plus the new field values
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - The updated appointment
    /// - `Ok(None)` - No appointment with that id; nothing was written
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(
        &self,
        params: UpdateAppointmentParams,
    ) -> Result<Option<Appointment>, DbErr> {
        let Some(appointment) = entity::prelude::Appointment::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::appointment::ActiveModel = appointment.into();
        active_model.patient_name = ActiveValue::Set(params.patient_name);
        active_model.date = ActiveValue::Set(params.date);
        active_model.dentist = ActiveValue::Set(params.dentist);
        active_model.procedure = ActiveValue::Set(params.procedure);

        let updated = active_model.update(self.db).await?;

        Ok(Some(Appointment::from_entity(updated)))
    }

    /// Deletes an appointment by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Appointment deleted
    /// - `Ok(false)` - No appointment with that id; nothing was deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
