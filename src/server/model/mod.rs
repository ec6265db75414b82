//! Domain models and operation parameters.
//!
//! Domain models sit between the data layer, which converts SeaORM entities into them,
//! and the controller layer, which converts them into DTOs. Parameter types carry the
//! inputs of a single operation.

pub mod appointment;
pub mod auth;
pub mod user;
