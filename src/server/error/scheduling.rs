use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures raised by the scheduling core (booking guard, availability slot
/// generation and their shared duration resolution).
///
/// This is a closed taxonomy: callers can rely on pattern-matching these
/// variants to pick a retry or surface-to-client policy. A rejected booking
/// is *not* an error; it is the `accepted = false` result of the guard.
#[derive(Error, Debug)]
pub enum SchedulingError {
    /// The requested service set is unusable: empty, containing ids that
    /// are missing, inactive or belong to another tenant, or summing to a
    /// zero duration.
    ///
    /// Client input error; never retried automatically.
    #[error("{0}")]
    InvalidServiceSet(String),

    /// The staff member does not exist, is inactive, or belongs to another
    /// tenant.
    ///
    /// Client input error.
    #[error("staff {staff_id} not found or inactive for business {business_id}")]
    StaffNotFound { business_id: i32, staff_id: i32 },

    /// The tenant's configured working hours are impossible (end of day at
    /// or before start of day).
    ///
    /// Tenant configuration error, surfaced distinctly so operators fix the
    /// settings instead of callers retrying.
    #[error("invalid working hours: end of day must be after start of day")]
    InvalidWorkingHours,

    /// The storage layer failed. Lock-wait timeouts and deadlocks land
    /// here too; `is_retryable` distinguishes them so the calling layer can
    /// re-run the whole booking attempt.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] sea_orm::DbErr),
}

impl SchedulingError {
    /// Whether the failure is a transient lock conflict worth retrying.
    ///
    /// Deadlocks and lock-wait timeouts are reported by the database as the
    /// victim transaction's error; the whole booking attempt (including
    /// duration resolution, since service data may have changed) must be
    /// re-run by the caller, a small bounded number of times.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::StorageUnavailable(err) => {
                let message = err.to_string().to_lowercase();
                message.contains("deadlock")
                    || message.contains("lock wait timeout")
                    || message.contains("could not serialize")
                    || message.contains("database is locked")
            }
            _ => false,
        }
    }
}

/// Maps scheduling failures to HTTP responses.
///
/// # Returns
/// - 400 Bad Request - invalid service set
/// - 404 Not Found - staff missing or inactive
/// - 422 Unprocessable Entity - broken working-hours configuration
/// - 503 Service Unavailable - storage failure (logged server-side)
impl IntoResponse for SchedulingError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidServiceSet(_) => StatusCode::BAD_REQUEST,
            Self::StaffNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidWorkingHours => StatusCode::UNPROCESSABLE_ENTITY,
            Self::StorageUnavailable(err) => {
                tracing::error!("storage unavailable: {}", err);
                return (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Storage unavailable, please retry".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
