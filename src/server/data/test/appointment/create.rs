use super::*;

/// Tests creating an appointment with price snapshots.
///
/// Verifies that the repository inserts the appointment row and one
/// `appointment_service` row per validated service, snapshotting each
/// service's current price.
///
/// Expected: Ok with appointment and snapshots created
#[tokio::test]
async fn creates_appointment_with_price_snapshots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;

    let start_time = Utc::now() + Duration::hours(2);
    let repo = AppointmentRepository::new(db);
    let appointment = repo
        .create(
            InsertAppointmentParams {
                business_id: business.id,
                customer_id: customer.id,
                staff_id: staff.id,
                start_time,
                status: AppointmentStatus::Scheduled,
                notes: Some("First visit".to_string()),
                admin_note: None,
                staff_note: None,
                customer_note: None,
            },
            &[service.clone()],
        )
        .await?;

    assert_eq!(appointment.business_id, business.id);
    assert_eq!(appointment.staff_id, staff.id);
    assert_eq!(appointment.start_time, start_time);
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.notes, Some("First visit".to_string()));

    let snapshots = entity::prelude::AppointmentService::find()
        .filter(entity::appointment_service::Column::AppointmentId.eq(appointment.id))
        .all(db)
        .await?;
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].service_id, service.id);
    assert_eq!(snapshots[0].price, service.price);

    Ok(())
}

/// Tests foreign key constraint on customer_id.
///
/// Verifies that the repository returns an error when attempting to create
/// an appointment referencing a customer that doesn't exist.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let staff = factory::staff::create_staff(db, business.id).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .create(
            InsertAppointmentParams {
                business_id: business.id,
                customer_id: 999999,
                staff_id: staff.id,
                start_time: Utc::now() + Duration::hours(2),
                status: AppointmentStatus::Scheduled,
                notes: None,
                admin_note: None,
                staff_note: None,
                customer_note: None,
            },
            &[],
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
