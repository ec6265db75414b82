//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let appointment = factory::create_appointment(&db).await?;
//!     let (user, role) = factory::helpers::create_user_with_role(&db, "Admin").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let appointment = factory::appointment::AppointmentFactory::new(&db)
//!     .patient_name("John Doe")
//!     .dentist("Dr. Smith")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `appointment` - Create appointment entities
//! - `user` - Create user entities
//! - `role` - Create role entities and user-role assignments
//! - `helpers` - Unique id generation and combined setups

pub mod appointment;
pub mod helpers;
pub mod role;
pub mod user;

pub use appointment::create_appointment;
pub use role::{create_role, create_user_role};
pub use user::create_user;
