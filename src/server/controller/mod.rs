pub mod appointment;
pub mod auth;
