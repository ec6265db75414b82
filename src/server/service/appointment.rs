//! Appointment service with query caching.
//!
//! Reads consult the shared `AppointmentCache` under a key derived from the query before
//! going to the repository. Writes go straight to the repository and then drop every
//! cache entry whose result they could have changed. A read only fills the cache if no
//! write invalidated it while the query was running.

use std::future::Future;

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::appointment::AppointmentRepository,
    error::AppError,
    model::appointment::{Appointment, CreateAppointmentParams, UpdateAppointmentParams},
    service::cache::{AppointmentCache, AppointmentCacheKey, CachedAppointments},
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a AppointmentCache,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a AppointmentCache) -> Self {
        Self { db, cache }
    }

    /// Creates a new appointment and invalidates cached listings.
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, AppError> {
        let repo = AppointmentRepository::new(self.db);

        let appointment = repo.create(params).await?;

        self.cache.invalidate_lists().await;

        Ok(appointment)
    }

    /// Gets an appointment by id, caching it when found.
    ///
    /// Missing appointments are not cached so a later create with that id is visible
    /// immediately.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, AppError> {
        let key = AppointmentCacheKey::ById(id);

        if let Some(CachedAppointments::One(appointment)) = self.cache.get(&key).await {
            tracing::debug!("Cache hit for appointment {}", id);
            return Ok(Some(appointment));
        }

        let repo = AppointmentRepository::new(self.db);
        let generation = self.cache.generation();
        let appointment = repo.get_by_id(id).await?;

        if let Some(appointment) = &appointment {
            self.cache
                .insert_if_current(key, CachedAppointments::One(appointment.clone()), generation)
                .await;
        }

        Ok(appointment)
    }

    /// Gets all appointments in insertion order
    pub async fn get_all(&self) -> Result<Vec<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.db);

        self.cached_list(AppointmentCacheKey::All, repo.get_all())
            .await
    }

    /// Gets all appointments for a patient name (exact match)
    pub async fn get_by_patient_name(
        &self,
        patient_name: &str,
    ) -> Result<Vec<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.db);
        let key = AppointmentCacheKey::ByPatientName(patient_name.to_string());

        self.cached_list(key, repo.get_by_patient_name(patient_name))
            .await
    }

    /// Gets all appointments for a dentist (exact match)
    pub async fn get_by_dentist(&self, dentist: &str) -> Result<Vec<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.db);
        let key = AppointmentCacheKey::ByDentist(dentist.to_string());

        self.cached_list(key, repo.get_by_dentist(dentist)).await
    }

    /// Overwrites an appointment.
    ///
    /// Returns None if the appointment doesn't exist; nothing is written and the cache
    /// is left untouched in that case.
    pub async fn update(
        &self,
        params: UpdateAppointmentParams,
    ) -> Result<Option<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.db);
        let id = params.id;

        let Some(appointment) = repo.update(params).await? else {
            tracing::debug!("Update of missing appointment {} ignored", id);
            return Ok(None);
        };

        self.invalidate_for(id).await;

        Ok(Some(appointment))
    }

    /// Deletes an appointment.
    ///
    /// Returns false if the appointment doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = AppointmentRepository::new(self.db);

        if !repo.delete(id).await? {
            tracing::debug!("Delete of missing appointment {} ignored", id);
            return Ok(false);
        }

        self.invalidate_for(id).await;

        Ok(true)
    }

    /// Returns the cached listing for `key`, running `query` only on a miss.
    async fn cached_list<F>(
        &self,
        key: AppointmentCacheKey,
        query: F,
    ) -> Result<Vec<Appointment>, AppError>
    where
        F: Future<Output = Result<Vec<Appointment>, DbErr>>,
    {
        if let Some(CachedAppointments::Many(appointments)) = self.cache.get(&key).await {
            tracing::debug!("Cache hit for {:?}", key);
            return Ok(appointments);
        }

        // `query` is lazy, so the generation is read before the database is touched
        let generation = self.cache.generation();
        let appointments = query.await?;

        self.cache
            .insert_if_current(key, CachedAppointments::Many(appointments.clone()), generation)
            .await;

        Ok(appointments)
    }

    async fn invalidate_for(&self, id: i32) {
        self.cache.invalidate(&AppointmentCacheKey::ById(id)).await;
        self.cache.invalidate_lists().await;
    }
}
