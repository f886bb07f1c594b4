//! Buffered-interval arithmetic.
//!
//! Pure functions over half-open `[start, end)` UTC intervals. All interval
//! math in the scheduling engine happens in UTC; tenant-timezone conversion
//! is confined to the slot-generation boundary.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// A half-open time interval `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Builds the effective interval an appointment occupies:
    /// `[start - buffer, start + duration + buffer)`.
    ///
    /// The buffer is symmetric padding so back-to-back appointments keep a
    /// gap for changeover; it participates in every conflict decision.
    pub fn buffered(start: DateTime<Utc>, duration_minutes: i64, buffer_minutes: i64) -> Self {
        let end = start + Duration::minutes(duration_minutes);
        Self {
            start: start - Duration::minutes(buffer_minutes),
            end: end + Duration::minutes(buffer_minutes),
        }
    }

    /// Half-open overlap test: `a.start < b.end && a.end > b.start`.
    ///
    /// Touching endpoints are legal adjacency, not a conflict: an interval
    /// ending exactly when another starts leaves both bookable.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// The calendar days this interval touches, ascending.
    ///
    /// A buffered window pushed across midnight spans two days; with a
    /// large enough buffer it can span three. Day locks must cover every
    /// one of them.
    pub fn days_spanned(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut day = self.start.date_naive();
        let last = self.end.date_naive();
        while day <= last {
            days.push(day);
            day += Duration::days(1);
        }
        days
    }

    /// The day-aligned query window containing this interval:
    /// `[midnight of start's day, midnight after end's day)`.
    ///
    /// Candidate appointments are fetched over this window so that
    /// neighbours whose own buffered intervals reach across a midnight
    /// boundary are not missed.
    pub fn day_window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let window_start = self.start.date_naive().and_time(NaiveTime::MIN).and_utc();
        let window_end = (self.end.date_naive() + Duration::days(1))
            .and_time(NaiveTime::MIN)
            .and_utc();
        (window_start, window_end)
    }
}

/// Coalesces intervals into a minimal disjoint set.
///
/// Intervals are sorted by start; a run is merged whenever the next
/// interval starts at or before the current merged end (adjacent intervals
/// merge too, which is what the slot generator wants for its blocked set).
pub fn merge_sorted(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by_key(|interval| interval.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for current in intervals {
        match merged.last_mut() {
            Some(last) if current.start <= last.end => {
                if current.end > last.end {
                    last.end = current.end;
                }
            }
            _ => merged.push(current),
        }
    }

    merged
}
