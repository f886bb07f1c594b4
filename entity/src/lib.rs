//! SeaORM entity definitions for the bookline database schema.
//!
//! One module per table. The `prelude` module re-exports every entity under
//! its `Entity` alias for use in queries.

pub mod appointment;
pub mod appointment_service;
pub mod business;
pub mod business_settings;
pub mod customer;
pub mod prelude;
pub mod service;
pub mod staff;
pub mod staff_day_lock;
