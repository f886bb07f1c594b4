use chrono::{DateTime, NaiveDateTime, Utc};
use entity::appointment::AppointmentStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Appointment lifecycle states as carried on the wire.
///
/// Mirrors `entity::appointment::AppointmentStatus`; kept separate so the
/// API schema does not leak ORM types.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatusDto {
    Pending,
    Scheduled,
    Completed,
    Cancelled,
    Rejected,
    NoShow,
}

impl From<AppointmentStatusDto> for AppointmentStatus {
    fn from(status: AppointmentStatusDto) -> Self {
        match status {
            AppointmentStatusDto::Pending => AppointmentStatus::Pending,
            AppointmentStatusDto::Scheduled => AppointmentStatus::Scheduled,
            AppointmentStatusDto::Completed => AppointmentStatus::Completed,
            AppointmentStatusDto::Cancelled => AppointmentStatus::Cancelled,
            AppointmentStatusDto::Rejected => AppointmentStatus::Rejected,
            AppointmentStatusDto::NoShow => AppointmentStatus::NoShow,
        }
    }
}

impl From<AppointmentStatus> for AppointmentStatusDto {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Pending => AppointmentStatusDto::Pending,
            AppointmentStatus::Scheduled => AppointmentStatusDto::Scheduled,
            AppointmentStatus::Completed => AppointmentStatusDto::Completed,
            AppointmentStatus::Cancelled => AppointmentStatusDto::Cancelled,
            AppointmentStatus::Rejected => AppointmentStatusDto::Rejected,
            AppointmentStatus::NoShow => AppointmentStatusDto::NoShow,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAppointmentDto {
    pub customer_id: i32,
    pub staff_id: i32,
    /// Appointment start. RFC 3339 with offset, or a naive timestamp
    /// which is taken as UTC.
    #[serde(deserialize_with = "deserialize_utc_timestamp")]
    #[schema(value_type = String, example = "2026-07-01T09:00:00Z")]
    pub start_time: DateTime<Utc>,
    pub service_ids: Vec<i32>,
    pub notes: Option<String>,
    pub admin_note: Option<String>,
    pub staff_note: Option<String>,
    pub customer_note: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateAppointmentDto {
    pub customer_id: Option<i32>,
    pub staff_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_opt_utc_timestamp")]
    #[schema(value_type = Option<String>, example = "2026-07-01T10:30:00Z")]
    pub start_time: Option<DateTime<Utc>>,
    pub service_ids: Option<Vec<i32>>,
    pub status: Option<AppointmentStatusDto>,
    pub notes: Option<String>,
    pub admin_note: Option<String>,
    pub staff_note: Option<String>,
    pub customer_note: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppointmentStatusUpdateDto {
    pub status: AppointmentStatusDto,
}

/// One booked service on an appointment, with the price snapshotted at
/// booking time.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppointmentServiceDto {
    pub service_id: i32,
    pub name: String,
    pub duration_minutes: i32,
    #[schema(value_type = String, example = "25.00")]
    pub price: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub business_id: i32,
    pub customer_id: i32,
    pub staff_id: i32,
    pub start_time: DateTime<Utc>,
    pub status: AppointmentStatusDto,
    pub notes: Option<String>,
    pub admin_note: Option<String>,
    pub staff_note: Option<String>,
    pub customer_note: Option<String>,
    pub customer_full_name: Option<String>,
    pub staff_full_name: Option<String>,
    pub services: Vec<AppointmentServiceDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Deserializes a UTC timestamp from RFC 3339 or from a naive
/// `YYYY-MM-DDTHH:MM[:SS]` string.
///
/// A timestamp carrying an explicit offset is converted to UTC; one without
/// an offset is interpreted as already being UTC, never guessed from
/// context.
pub fn deserialize_utc_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let raw = String::deserialize(deserializer)?;
    parse_utc_timestamp(&raw).map_err(D::Error::custom)
}

fn deserialize_opt_utc_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.map(|value| parse_utc_timestamp(&value).map_err(D::Error::custom))
        .transpose()
}

fn parse_utc_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(raw) {
        return Ok(aware.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!("invalid timestamp '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_with_offset_to_utc() {
        let parsed = parse_utc_timestamp("2026-07-01T12:00:00+03:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn treats_naive_timestamp_as_utc() {
        let parsed = parse_utc_timestamp("2026-07-01T09:30:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 7, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_utc_timestamp("next tuesday").is_err());
    }
}
