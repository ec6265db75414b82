//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the application. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for issuing and validating bearer tokens
//! - Appointment query cache

use sea_orm::DatabaseConnection;

use super::service::{cache::AppointmentCache, token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds its keys behind an `Arc`
/// - `AppointmentCache` shares its entries behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues bearer tokens on login and validates them on protected endpoints.
    pub tokens: TokenService,

    /// Query-keyed cache for appointment reads.
    ///
    /// Shared by every request; writes through the appointment service invalidate
    /// the affected entries.
    pub cache: AppointmentCache,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Bearer token service
    /// - `cache` - Appointment query cache
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService, cache: AppointmentCache) -> Self {
        Self { db, tokens, cache }
    }
}
