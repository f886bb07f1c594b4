//! Availability slot generation.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

use crate::{
    model::availability::AvailableSlotsDto,
    server::{
        data::{
            appointment::AppointmentRepository, settings::SettingsRepository,
            staff::StaffRepository,
        },
        error::scheduling::SchedulingError,
        service::scheduling::{merge_sorted, resolve_services, Interval},
        util::time::{local_to_utc, truncate_to_minute},
    },
};

/// Generates the bookable slot list for one staff member on one date.
///
/// Read-only: runs on the shared pool, takes no locks, and stays consistent
/// with the double-booking guard by reusing the same buffered-interval and
/// duration primitives.
pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
    default_time_zone: Tz,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection, default_time_zone: Tz) -> Self {
        Self {
            db,
            default_time_zone,
        }
    }

    /// Enumerates bookable slot start times for a staff member on a date.
    ///
    /// Steps:
    /// 1. Validate the staff member is active for the tenant.
    /// 2. Load tenant settings, lazily creating defaults on first read.
    /// 3. Slot occupancy = requested services' total duration, or the
    ///    configured default slot length when no services are given.
    /// 4. Reject impossible working hours (end at or before start).
    /// 5. Collect the day's non-cancelled bookings, buffer each one, and
    ///    merge them into a minimal blocked-interval set.
    /// 6. Working window and tenant-local day bounds are interpreted in the
    ///    tenant's zone and converted to UTC; all interval math stays UTC.
    /// 7. When the requested date is "today" in the tenant's zone, slots
    ///    starting before now (truncated to the minute) are excluded;
    ///    a slot starting exactly at the truncated instant stays bookable.
    /// 8. Walk the working window in steps of the configured slot length
    ///    (the grid stays on the configured granularity even when the
    ///    requested services run longer), emitting tenant-local ISO-8601
    ///    start times.
    ///
    /// # Arguments
    /// - `business_id` / `staff_id`: Calendar owner
    /// - `date`: Calendar date to generate for (tenant-local)
    /// - `service_ids`: Optional service selection driving slot occupancy
    ///
    /// # Returns
    /// - `Ok(AvailableSlotsDto)`: Ordered slots, slot duration, timezone used
    /// - `Err(SchedulingError::StaffNotFound)`: Staff missing/inactive/foreign
    /// - `Err(SchedulingError::InvalidServiceSet)`: Bad service selection
    /// - `Err(SchedulingError::InvalidWorkingHours)`: end <= start configured
    /// - `Err(SchedulingError::StorageUnavailable)`: Database failure
    pub async fn generate(
        &self,
        business_id: i32,
        staff_id: i32,
        date: NaiveDate,
        service_ids: Option<&[i32]>,
    ) -> Result<AvailableSlotsDto, SchedulingError> {
        StaffRepository::new(self.db)
            .find_active(business_id, staff_id)
            .await?
            .ok_or(SchedulingError::StaffNotFound {
                business_id,
                staff_id,
            })?;

        let settings = SettingsRepository::new(self.db)
            .get_or_create(business_id, self.default_time_zone.name())
            .await?;

        let slot_duration_minutes = match service_ids {
            Some(ids) => {
                resolve_services(self.db, business_id, ids)
                    .await?
                    .total_duration_minutes
            }
            None => i64::from(settings.slot_length_minutes),
        };

        if settings.working_hours_end <= settings.working_hours_start {
            return Err(SchedulingError::InvalidWorkingHours);
        }

        let tz: Tz = settings.time_zone.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "business {} has unparseable time zone '{}', falling back to {}",
                business_id,
                settings.time_zone,
                self.default_time_zone
            );
            self.default_time_zone
        });

        // The tenant-local calendar day, as a UTC range.
        let day_start = local_to_utc(date.and_time(NaiveTime::MIN), tz);
        let day_end = local_to_utc((date + Duration::days(1)).and_time(NaiveTime::MIN), tz);

        let repository = AppointmentRepository::new(self.db);
        let appointments = repository
            .find_in_range(business_id, staff_id, day_start, day_end)
            .await?;
        let appointment_ids: Vec<i32> = appointments.iter().map(|a| a.id).collect();
        let durations = repository
            .total_durations(business_id, &appointment_ids)
            .await?;

        let buffer_minutes = i64::from(settings.buffer_time_minutes);
        let blocked = merge_sorted(
            appointments
                .iter()
                .map(|appointment| {
                    Interval::buffered(
                        appointment.start_time,
                        durations.get(&appointment.id).copied().unwrap_or(0),
                        buffer_minutes,
                    )
                })
                .collect(),
        );

        let working_start = local_to_utc(date.and_time(settings.working_hours_start), tz);
        let working_end = local_to_utc(date.and_time(settings.working_hours_end), tz);

        let now_local = Utc::now().with_timezone(&tz);
        let min_start = (date == now_local.date_naive())
            .then(|| truncate_to_minute(now_local.with_timezone(&Utc)));

        let slots = collect_slots(
            working_start,
            working_end,
            i64::from(settings.slot_length_minutes),
            slot_duration_minutes,
            min_start,
            &blocked,
        );

        Ok(AvailableSlotsDto {
            available_slots: slots
                .into_iter()
                .map(|slot| {
                    slot.with_timezone(&tz)
                        .naive_local()
                        .format("%Y-%m-%dT%H:%M:%S")
                        .to_string()
                })
                .collect(),
            time_zone: tz.name().to_string(),
            slot_duration_minutes,
        })
    }
}

/// Walks the working window and collects bookable slot starts.
///
/// Candidates step forward from `working_start` by `step_minutes` (the
/// configured grid). Each candidate occupies `[t, t + slot_duration)` and is
/// kept only if it ends by `working_end` (ending exactly at `working_end`
/// is allowed), starts at or after `min_start` when one applies, and does
/// not overlap any blocked interval.
fn collect_slots(
    working_start: DateTime<Utc>,
    working_end: DateTime<Utc>,
    step_minutes: i64,
    slot_duration_minutes: i64,
    min_start: Option<DateTime<Utc>>,
    blocked: &[Interval],
) -> Vec<DateTime<Utc>> {
    let mut slots = Vec::new();
    let floor = match min_start {
        Some(min_start) if min_start > working_start => min_start,
        _ => working_start,
    };

    let mut current = working_start;
    while current < working_end {
        let slot = Interval::new(current, current + Duration::minutes(slot_duration_minutes));

        if slot.end > working_end {
            break;
        }

        if slot.start >= floor && !blocked.iter().any(|interval| slot.overlaps(interval)) {
            slots.push(slot.start);
        }

        current += Duration::minutes(step_minutes);
    }

    slots
}
