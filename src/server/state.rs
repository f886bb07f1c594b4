//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or copyable types) for
/// each incoming request via Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests; clones share the
    /// underlying pool. Constructed at process start and closed at process
    /// stop, never referenced as a global.
    pub db: DatabaseConnection,

    /// Fallback IANA timezone for tenants whose settings have not been
    /// created yet (or carry an unparseable zone name).
    pub default_time_zone: Tz,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `default_time_zone` - Fallback timezone for lazily-created settings
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, default_time_zone: Tz) -> Self {
        Self {
            db,
            default_time_zone,
        }
    }
}
