//! Factory methods for creating test entities with sensible defaults.
//!
//! Each module provides a builder-style factory plus a shorthand `create_*`
//! function for the common case. Factories insert rows directly through the
//! entity layer so tests can assemble exactly the database state they need.

pub mod appointment;
pub mod business;
pub mod customer;
pub mod helpers;
pub mod service;
pub mod settings;
pub mod staff;
