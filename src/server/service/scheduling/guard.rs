//! The double-booking guard.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseTransaction;

use crate::server::{
    data::{
        appointment::AppointmentRepository,
        day_lock::StaffDayLockRepository,
        settings::{SettingsRepository, DEFAULT_BUFFER_TIME_MINUTES},
    },
    error::scheduling::SchedulingError,
    service::scheduling::{duration::resolve_services, interval::Interval},
};

/// Summary of an appointment whose buffered interval collides with a
/// booking attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingAppointment {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Outcome of a guard evaluation.
///
/// `accepted == conflicts.is_empty()`; the conflicting set is attached so
/// callers can present counts or identities. The resolved duration and
/// validated services are returned for the caller's insert path, saving a
/// second resolution inside the same transaction.
pub struct BookingDecision {
    pub accepted: bool,
    pub conflicts: Vec<ConflictingAppointment>,
    pub total_duration_minutes: i64,
    pub services: Vec<entity::service::Model>,
}

/// Temporal-conflict oracle for booking attempts.
///
/// The guard decides, under concurrency, whether a new or modified
/// appointment may occupy a staff member's calendar. It must run inside a
/// transaction the caller controls: it never commits or rolls back, and it
/// knows nothing of HTTP or status transitions. Callers receiving
/// `accepted = false` abort the transaction without writing; callers
/// receiving `accepted = true` insert or update within the same
/// transaction before committing.
///
/// Do not interleave two evaluations for the same staff member in one
/// transaction; each booking attempt gets its own.
pub struct BookingGuard<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> BookingGuard<'a> {
    pub fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Evaluates a booking attempt against the staff member's calendar.
    ///
    /// Steps:
    /// 1. Resolve the requested services into a total duration (tenant-safe).
    /// 2. Compute the buffered interval using the tenant's buffer setting.
    /// 3. Acquire the per-(tenant, staff, day) locks for every day the
    ///    buffered interval spans, ascending. This serializes concurrent
    ///    attempts on the same days - including two racing first-bookings
    ///    of an untouched day, which no appointment-row lock could order.
    /// 4. Fetch and row-lock the non-cancelled appointments whose start
    ///    falls in the day-aligned window, excluding
    ///    `exclude_appointment_id` (an appointment must never conflict
    ///    with itself during an update).
    /// 5. Resolve each candidate's duration from its stored associations.
    /// 6. Test buffered-interval overlap against every candidate.
    ///
    /// # Arguments
    /// - `business_id` / `staff_id`: Calendar owner
    /// - `start_time`: Proposed appointment start (UTC)
    /// - `service_ids`: Requested services (drive the occupied length)
    /// - `exclude_appointment_id`: Set during updates to the appointment's
    ///   own id
    ///
    /// # Returns
    /// - `Ok(BookingDecision)`: Accept/reject with the conflicting set
    /// - `Err(SchedulingError::InvalidServiceSet)`: Service validation failed
    /// - `Err(SchedulingError::StorageUnavailable)`: Storage failure or lock
    ///   timeout; retryable ones are flagged by `is_retryable`
    pub async fn evaluate(
        &self,
        business_id: i32,
        staff_id: i32,
        start_time: DateTime<Utc>,
        service_ids: &[i32],
        exclude_appointment_id: Option<i32>,
    ) -> Result<BookingDecision, SchedulingError> {
        let resolved = resolve_services(self.txn, business_id, service_ids).await?;

        // Read-if-present; the guard does not create settings rows.
        let buffer_minutes = SettingsRepository::new(self.txn)
            .find_by_business(business_id)
            .await?
            .map(|settings| i64::from(settings.buffer_time_minutes))
            .unwrap_or(i64::from(DEFAULT_BUFFER_TIME_MINUTES));

        let candidate = Interval::buffered(
            start_time,
            resolved.total_duration_minutes,
            buffer_minutes,
        );

        StaffDayLockRepository::new(self.txn)
            .lock_days(business_id, staff_id, &candidate.days_spanned())
            .await?;

        let (window_start, window_end) = candidate.day_window();
        let repository = AppointmentRepository::new(self.txn);
        let existing = repository
            .find_in_window_for_update(
                business_id,
                staff_id,
                window_start,
                window_end,
                exclude_appointment_id,
            )
            .await?;

        let existing_ids: Vec<i32> = existing.iter().map(|appointment| appointment.id).collect();
        let durations = repository
            .total_durations(business_id, &existing_ids)
            .await?;

        let mut conflicts = Vec::new();
        for appointment in existing {
            let duration_minutes = durations.get(&appointment.id).copied().unwrap_or(0);
            let occupied =
                Interval::buffered(appointment.start_time, duration_minutes, buffer_minutes);

            if candidate.overlaps(&occupied) {
                conflicts.push(ConflictingAppointment {
                    id: appointment.id,
                    start_time: appointment.start_time,
                    duration_minutes,
                });
            }
        }

        Ok(BookingDecision {
            accepted: conflicts.is_empty(),
            conflicts,
            total_duration_minutes: resolved.total_duration_minutes,
            services: resolved.services,
        })
    }
}
