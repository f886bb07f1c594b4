//! Time utilities for crossing the tenant-timezone boundary.
//!
//! All interval arithmetic inside the scheduling core happens in UTC;
//! conversion to and from a tenant's configured zone happens only at the
//! slot-generation input/output boundary, never mid-computation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::server::error::AppError;

/// Parses a calendar date string (YYYY-MM-DD).
///
/// # Arguments
/// - `date` - The date string to parse
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - Input is not a valid YYYY-MM-DD date
pub fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date format: {}", date)))
}

/// Converts a tenant-local naive datetime to the UTC instant it denotes.
///
/// DST gap fallback: if the local time does not exist (spring-forward) or is
/// ambiguous (fall-back), the latest valid interpretation is used; when no
/// interpretation exists the naive value is taken as UTC.
pub fn local_to_utc(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

/// Drops a UTC instant's sub-minute precision.
///
/// The "now" floor for today's slot generation compares at minute
/// granularity; a slot starting exactly at the truncated instant is still
/// bookable.
pub fn truncate_to_minute(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone};

    #[test]
    fn parses_valid_date() {
        assert_eq!(
            parse_date("2026-07-01").unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()
        );
    }

    #[test]
    fn rejects_invalid_date() {
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn converts_local_to_utc() {
        let naive = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        let utc = local_to_utc(naive, chrono_tz::Europe::Istanbul);
        assert_eq!(utc, Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap());
    }

    #[test]
    fn truncates_seconds_and_nanos() {
        let instant = Utc.with_ymd_and_hms(2026, 7, 1, 9, 15, 42).unwrap();
        let truncated = truncate_to_minute(instant);
        assert_eq!(truncated.second(), 0);
        assert_eq!(truncated, Utc.with_ymd_and_hms(2026, 7, 1, 9, 15, 0).unwrap());
    }
}
