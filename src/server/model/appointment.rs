use chrono::{DateTime, Utc};
use entity::appointment::AppointmentStatus;

/// Values for inserting a new appointment row.
///
/// The service associations are passed alongside (as validated catalog
/// models) so the repository can write the per-service price snapshots in
/// the same call.
pub struct InsertAppointmentParams {
    pub business_id: i32,
    pub customer_id: i32,
    pub staff_id: i32,
    pub start_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub admin_note: Option<String>,
    pub staff_note: Option<String>,
    pub customer_note: Option<String>,
}

/// Partial update of an appointment row.
///
/// `None` leaves a field untouched. The note fields use a nested `Option`
/// so callers can distinguish "leave as is" (`None`) from "set to NULL"
/// (`Some(None)`).
#[derive(Default)]
pub struct UpdateAppointmentFields {
    pub customer_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
    pub admin_note: Option<Option<String>>,
    pub staff_note: Option<Option<String>>,
    pub customer_note: Option<Option<String>>,
}
