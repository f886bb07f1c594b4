use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::appointment::deserialize_utc_timestamp;

/// Booking request submitted by an unauthenticated customer.
///
/// The customer is matched by email within the tenant and created on the
/// fly when unknown; the resulting appointment starts in the `pending`
/// request state and still occupies the staff calendar.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PublicBookingDto {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub staff_id: i32,
    pub service_ids: Vec<i32>,
    /// Appointment start. RFC 3339 with offset, or a naive timestamp
    /// which is taken as UTC.
    #[serde(deserialize_with = "deserialize_utc_timestamp")]
    #[schema(value_type = String, example = "2026-07-01T09:00:00Z")]
    pub start_time: DateTime<Utc>,
    pub notes: Option<String>,
}
