use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bookable slots for one staff member on one calendar date.
///
/// Slot entries are ISO-8601 local timestamps in the business timezone;
/// `slot_duration_minutes` is the occupied length each slot represents
/// (the requested services' total duration, or the configured default
/// slot length when no services were specified).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailableSlotsDto {
    #[schema(example = json!(["2026-07-01T09:00:00", "2026-07-01T09:30:00"]))]
    pub available_slots: Vec<String>,
    pub time_zone: String,
    pub slot_duration_minutes: i64,
}
