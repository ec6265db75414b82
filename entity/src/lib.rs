//! SeaORM entity models for the dental appointment database.

pub mod prelude;

pub mod appointment;
pub mod role;
pub mod user;
pub mod user_role;
