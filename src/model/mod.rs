//! Data transfer objects shared across the HTTP boundary.

pub mod api;
pub mod appointment;
pub mod auth;
