use super::*;

/// Tests duration summing over multiple services.
///
/// Expected: Ok with the sum of both services' durations
#[tokio::test]
async fn sums_service_durations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, short_service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let long_service =
        factory::service::create_service_with_duration(db, business.id, 45).await?;

    let appointment = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        Utc::now() + Duration::hours(2),
        &[short_service.clone(), long_service.clone()],
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let durations = repo
        .total_durations(business.id, &[appointment.id])
        .await?;

    assert_eq!(durations.get(&appointment.id), Some(&75));

    Ok(())
}

/// Tests that duplicate associations count additively.
///
/// Expected: Ok with twice the single service's duration
#[tokio::test]
async fn counts_duplicate_associations_additively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;

    let appointment = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        Utc::now() + Duration::hours(2),
        &[service.clone(), service.clone()],
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let durations = repo
        .total_durations(business.id, &[appointment.id])
        .await?;

    assert_eq!(durations.get(&appointment.id), Some(&60));

    Ok(())
}

/// Tests that a retired service still contributes its duration.
///
/// Bookings keep their occupied length after the service is deactivated in
/// the catalog; only *new* bookings reject inactive services.
///
/// Expected: Ok with the original duration
#[tokio::test]
async fn keeps_durations_of_deactivated_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;

    let appointment = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        Utc::now() + Duration::hours(2),
        &[service.clone()],
    )
    .await?;

    crate::server::data::service::ServiceRepository::new(db)
        .update(business.id, service.id, None, None, None, None, Some(false))
        .await?;

    let repo = AppointmentRepository::new(db);
    let durations = repo
        .total_durations(business.id, &[appointment.id])
        .await?;

    assert_eq!(durations.get(&appointment.id), Some(&30));

    Ok(())
}

/// Tests the empty-input fast path.
///
/// Expected: Ok with an empty map, no query issued
#[tokio::test]
async fn empty_input_yields_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppointmentRepository::new(db);
    let durations = repo.total_durations(1, &[]).await?;

    assert!(durations.is_empty());

    Ok(())
}
