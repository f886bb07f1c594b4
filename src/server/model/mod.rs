//! Operation-specific parameter types passed between the service and data
//! layers.
//!
//! Parameter structs keep repository signatures stable while the HTTP DTOs
//! evolve; services convert DTOs into params before calling into `data`.

pub mod appointment;
