//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Password policy, idempotent role handling, no-op writes
//! - **Caching**: Serving appointment reads from the query cache and invalidating it on writes
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod appointment;
pub mod auth;
pub mod cache;
pub mod password;
pub mod token;
