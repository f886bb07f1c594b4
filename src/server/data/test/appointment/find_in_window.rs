use super::*;

/// Tests window filtering and ordering.
///
/// Verifies that only appointments whose start falls inside
/// `[window_start, window_end)` are returned, ordered by start ascending.
///
/// Expected: Ok with the two in-window appointments, earliest first
#[tokio::test]
async fn returns_rows_in_window_ordered_by_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;

    let base = Utc::now() + Duration::days(5);
    let inside_late = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        base + Duration::hours(3),
        &[service.clone()],
    )
    .await?;
    let inside_early = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        base + Duration::hours(1),
        &[service.clone()],
    )
    .await?;
    // Starts exactly at window_end, which is exclusive.
    factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        base + Duration::hours(6),
        &[service.clone()],
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let found = repo
        .find_in_window_for_update(
            business.id,
            staff.id,
            base,
            base + Duration::hours(6),
            None,
        )
        .await?;

    assert_eq!(
        found.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![inside_early.id, inside_late.id]
    );

    Ok(())
}

/// Tests that cancelled appointments are invisible to the window query.
///
/// Expected: Ok with only the scheduled appointment
#[tokio::test]
async fn excludes_cancelled_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;

    let base = Utc::now() + Duration::days(5);
    let scheduled = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        base + Duration::hours(1),
        &[service.clone()],
    )
    .await?;
    factory::appointment::AppointmentFactory::new(db, business.id, customer.id, staff.id)
        .start_time(base + Duration::hours(2))
        .status(AppointmentStatus::Cancelled)
        .services(&[service.clone()])
        .build()
        .await?;
    // Pending still occupies the calendar.
    let pending =
        factory::appointment::AppointmentFactory::new(db, business.id, customer.id, staff.id)
            .start_time(base + Duration::hours(3))
            .status(AppointmentStatus::Pending)
            .services(&[service.clone()])
            .build()
            .await?;

    let repo = AppointmentRepository::new(db);
    let found = repo
        .find_in_window_for_update(
            business.id,
            staff.id,
            base,
            base + Duration::hours(6),
            None,
        )
        .await?;

    assert_eq!(
        found.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![scheduled.id, pending.id]
    );

    Ok(())
}

/// Tests the self-exclusion parameter.
///
/// Expected: Ok without the excluded appointment
#[tokio::test]
async fn excludes_given_appointment_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;

    let base = Utc::now() + Duration::days(5);
    let appointment = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        base + Duration::hours(1),
        &[service.clone()],
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let found = repo
        .find_in_window_for_update(
            business.id,
            staff.id,
            base,
            base + Duration::hours(6),
            Some(appointment.id),
        )
        .await?;

    assert!(found.is_empty());

    Ok(())
}

/// Tests tenant and staff scoping of the window query.
///
/// Appointments of another staff member, and of another business, must not
/// leak into the candidate set.
///
/// Expected: Ok with only the matching staff member's appointment
#[tokio::test]
async fn scopes_by_business_and_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let other_staff = factory::staff::create_staff(db, business.id).await?;
    let (other_business, other_customer, other_business_staff, other_service) =
        factory::helpers::create_booking_dependencies(db).await?;

    let base = Utc::now() + Duration::days(5);
    let mine = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        base + Duration::hours(1),
        &[service.clone()],
    )
    .await?;
    factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        other_staff.id,
        base + Duration::hours(1),
        &[service.clone()],
    )
    .await?;
    factory::appointment::create_appointment(
        db,
        other_business.id,
        other_customer.id,
        other_business_staff.id,
        base + Duration::hours(1),
        &[other_service.clone()],
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let found = repo
        .find_in_window_for_update(
            business.id,
            staff.id,
            base,
            base + Duration::hours(6),
            None,
        )
        .await?;

    assert_eq!(found.iter().map(|a| a.id).collect::<Vec<_>>(), vec![mine.id]);

    Ok(())
}
