use crate::server::{
    data::appointment::AppointmentRepository,
    error::scheduling::SchedulingError,
    model::appointment::InsertAppointmentParams,
    service::scheduling::{BookingDecision, BookingGuard, Interval},
};
use chrono::{DateTime, Duration, Utc};
use entity::appointment::AppointmentStatus;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

/// A start time `h:m` on a fixed day far enough in the future to keep
/// tests clear of "now"-dependent behavior.
fn at(h: u32, m: u32) -> DateTime<Utc> {
    day(0, h, m)
}

/// Like `at`, offset by whole days.
fn day(days: i64, h: u32, m: u32) -> DateTime<Utc> {
    (Utc::now().date_naive() + Duration::days(10 + days))
        .and_hms_opt(h, m, 0)
        .unwrap()
        .and_utc()
}

/// Runs one guard evaluation in its own transaction and commits it.
async fn evaluate(
    db: &DatabaseConnection,
    business_id: i32,
    staff_id: i32,
    start: DateTime<Utc>,
    service_ids: &[i32],
    exclude: Option<i32>,
) -> Result<BookingDecision, SchedulingError> {
    let txn = db.begin().await?;
    let decision = BookingGuard::new(&txn)
        .evaluate(business_id, staff_id, start, service_ids, exclude)
        .await?;
    txn.commit().await?;
    Ok(decision)
}

/// Full booking attempt: evaluate, and insert the appointment when
/// accepted, exactly as the calling layer does.
async fn book(
    db: &DatabaseConnection,
    business_id: i32,
    customer_id: i32,
    staff_id: i32,
    start: DateTime<Utc>,
    services: &[entity::service::Model],
) -> Result<bool, SchedulingError> {
    let service_ids: Vec<i32> = services.iter().map(|s| s.id).collect();

    let txn = db.begin().await?;
    let decision = BookingGuard::new(&txn)
        .evaluate(business_id, staff_id, start, &service_ids, None)
        .await?;

    if decision.accepted {
        AppointmentRepository::new(&txn)
            .create(
                InsertAppointmentParams {
                    business_id,
                    customer_id,
                    staff_id,
                    start_time: start,
                    status: AppointmentStatus::Scheduled,
                    notes: None,
                    admin_note: None,
                    staff_note: None,
                    customer_note: None,
                },
                &decision.services,
            )
            .await?;
        txn.commit().await?;
    } else {
        txn.rollback().await?;
    }

    Ok(decision.accepted)
}

/// An empty calendar accepts the first booking, and the attempt leaves a
/// day-lock marker behind even though no appointment existed yet: racing
/// first-bookings must serialize on something.
#[tokio::test]
async fn accepts_first_booking_and_creates_day_lock() -> Result<(), SchedulingError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    let accepted = book(db, business.id, customer.id, staff.id, at(9, 0), &[service]).await?;
    assert!(accepted);

    let lock_rows = entity::prelude::StaffDayLock::find().count(db).await?;
    assert_eq!(lock_rows, 1);

    Ok(())
}

/// Overlapping buffered intervals are rejected with the conflict attached.
///
/// buffer=15, duration=30: A at 09:00 occupies 08:45-09:45; B at 09:45
/// occupies 09:30-10:30 and 09:30 < 09:45 is a real overlap.
#[tokio::test]
async fn rejects_buffered_overlap() -> Result<(), SchedulingError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    assert!(book(db, business.id, customer.id, staff.id, at(9, 0), &[service.clone()]).await?);

    let decision = evaluate(
        db,
        business.id,
        staff.id,
        at(9, 45),
        &[service.id],
        None,
    )
    .await?;

    assert!(!decision.accepted);
    assert_eq!(decision.conflicts.len(), 1);
    assert_eq!(decision.conflicts[0].start_time, at(9, 0));
    assert_eq!(decision.conflicts[0].duration_minutes, 30);

    Ok(())
}

/// Exact buffered adjacency is legal: A buffered to 08:45-09:45 and B at
/// 10:00 buffered to 09:45-10:45 touch at 09:45 without conflicting.
#[tokio::test]
async fn accepts_exact_buffered_adjacency() -> Result<(), SchedulingError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    assert!(book(db, business.id, customer.id, staff.id, at(9, 0), &[service.clone()]).await?);
    assert!(book(db, business.id, customer.id, staff.id, at(10, 0), &[service]).await?);

    Ok(())
}

/// An appointment re-saved at its own time must not conflict with itself.
#[tokio::test]
async fn excludes_own_row_during_update() -> Result<(), SchedulingError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    let appointment = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        at(9, 0),
        &[service.clone()],
    )
    .await?;

    let without_exclusion =
        evaluate(db, business.id, staff.id, at(9, 0), &[service.id], None).await?;
    assert!(!without_exclusion.accepted);

    let with_exclusion = evaluate(
        db,
        business.id,
        staff.id,
        at(9, 0),
        &[service.id],
        Some(appointment.id),
    )
    .await?;
    assert!(with_exclusion.accepted);

    Ok(())
}

/// A buffered window pushed across midnight must conflict with a booking
/// early the next day: 23:50 + 30min with buffer 30 occupies 23:20-01:10,
/// which covers a 00:05 candidate the following morning.
#[tokio::test]
async fn detects_conflicts_across_midnight() -> Result<(), SchedulingError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::SettingsFactory::new(db, business.id)
        .buffer_time_minutes(30)
        .build()
        .await?;

    assert!(
        book(
            db,
            business.id,
            customer.id,
            staff.id,
            day(0, 23, 50),
            &[service.clone()]
        )
        .await?
    );

    // Both calendar days now carry a lock marker.
    let lock_rows = entity::prelude::StaffDayLock::find().count(db).await?;
    assert_eq!(lock_rows, 2);

    let decision = evaluate(
        db,
        business.id,
        staff.id,
        day(1, 0, 5),
        &[service.id],
        None,
    )
    .await?;
    assert!(!decision.accepted);

    Ok(())
}

/// Cancelled appointments free the calendar entirely.
#[tokio::test]
async fn ignores_cancelled_appointments() -> Result<(), SchedulingError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    factory::appointment::AppointmentFactory::new(db, business.id, customer.id, staff.id)
        .start_time(at(9, 0))
        .status(AppointmentStatus::Cancelled)
        .services(&[service.clone()])
        .build()
        .await?;

    let decision = evaluate(db, business.id, staff.id, at(9, 0), &[service.id], None).await?;
    assert!(decision.accepted);

    Ok(())
}

/// Another tenant's identical calendar must never produce conflicts.
#[tokio::test]
async fn ignores_other_tenants_appointments() -> Result<(), SchedulingError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let (other_business, other_customer, other_staff, other_service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;
    factory::settings::create_settings(db, other_business.id).await?;

    assert!(
        book(
            db,
            other_business.id,
            other_customer.id,
            other_staff.id,
            at(9, 0),
            &[other_service]
        )
        .await?
    );

    let accepted = book(db, business.id, customer.id, staff.id, at(9, 0), &[service]).await?;
    assert!(accepted);

    Ok(())
}

/// Service-set validation failures from the guard entry point.
#[tokio::test]
async fn rejects_invalid_service_sets() -> Result<(), SchedulingError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let other_business = factory::business::create_business(db).await?;
    let foreign_service = factory::service::create_service(db, other_business.id).await?;
    let inactive_service = factory::service::ServiceFactory::new(db, business.id)
        .is_active(false)
        .build()
        .await?;
    let zero_duration = factory::service::ServiceFactory::new(db, business.id)
        .duration_minutes(0)
        .build()
        .await?;

    for service_ids in [
        Vec::new(),
        vec![foreign_service.id],
        vec![inactive_service.id],
        vec![zero_duration.id],
        vec![service.id, 999999],
    ] {
        let result = evaluate(db, business.id, staff.id, at(9, 0), &service_ids, None).await;
        assert!(
            matches!(result, Err(SchedulingError::InvalidServiceSet(_))),
            "expected InvalidServiceSet for {:?}",
            service_ids
        );
    }

    Ok(())
}

/// Without a settings row the guard falls back to the 15 minute default
/// buffer: a candidate 50 minutes after a 30 minute booking overlaps
/// (09:35 < 09:45), while 60 minutes after is exact adjacency.
#[tokio::test]
async fn defaults_buffer_when_settings_absent() -> Result<(), SchedulingError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;

    assert!(book(db, business.id, customer.id, staff.id, at(9, 0), &[service.clone()]).await?);

    let overlapping =
        evaluate(db, business.id, staff.id, at(9, 50), &[service.id], None).await?;
    assert!(!overlapping.accepted);

    let adjacent = evaluate(db, business.id, staff.id, at(10, 0), &[service.id], None).await?;
    assert!(adjacent.accepted);

    Ok(())
}

/// Property: a sequence of bookings pushed through the guard leaves only
/// pairwise-disjoint buffered intervals on the calendar, no matter how
/// the attempts collide.
#[tokio::test]
async fn accepted_bookings_stay_pairwise_disjoint() -> Result<(), SchedulingError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    // Starts chosen to mix accepts, rejects, and exact adjacencies.
    let attempts = [
        (9, 0),
        (9, 15),
        (10, 0),
        (10, 30),
        (11, 0),
        (11, 59),
        (12, 0),
        (13, 0),
        (13, 45),
        (14, 0),
    ];

    let mut accepted_starts = Vec::new();
    for (h, m) in attempts {
        if book(db, business.id, customer.id, staff.id, at(h, m), &[service.clone()]).await? {
            accepted_starts.push(at(h, m));
        }
    }

    assert!(accepted_starts.len() >= 2);

    let intervals: Vec<Interval> = accepted_starts
        .iter()
        .map(|start| Interval::buffered(*start, 30, 15))
        .collect();

    for (i, a) in intervals.iter().enumerate() {
        for b in intervals.iter().skip(i + 1) {
            assert!(
                !a.overlaps(b),
                "accepted bookings overlap: {:?} vs {:?}",
                a,
                b
            );
        }
    }

    Ok(())
}
