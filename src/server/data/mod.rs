//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and are
//! generic over the connection handle, so the same repository runs against the shared
//! pool or inside a caller-owned transaction (the double-booking guard relies on this
//! to keep its day locks and row locks inside one transaction).

pub mod appointment;
pub mod business;
pub mod customer;
pub mod day_lock;
pub mod service;
pub mod settings;
pub mod staff;

#[cfg(test)]
mod test;
