use crate::{
    model::appointment::{
        AppointmentStatusDto, CreateAppointmentDto, UpdateAppointmentDto,
    },
    server::{error::AppError, service::appointment::AppointmentService},
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

fn at(h: u32, m: u32) -> DateTime<Utc> {
    (Utc::now().date_naive() + Duration::days(10))
        .and_hms_opt(h, m, 0)
        .unwrap()
        .and_utc()
}

fn create_dto(
    customer_id: i32,
    staff_id: i32,
    start: DateTime<Utc>,
    service_ids: Vec<i32>,
) -> CreateAppointmentDto {
    CreateAppointmentDto {
        customer_id,
        staff_id,
        start_time: start,
        service_ids,
        notes: None,
        admin_note: None,
        staff_note: None,
        customer_note: None,
    }
}

/// Create-then-get roundtrip with enriched data.
#[tokio::test]
async fn creates_and_enriches_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    let appointment_service = AppointmentService::new(db);
    let created = appointment_service
        .create(
            business.id,
            create_dto(customer.id, staff.id, at(9, 0), vec![service.id]),
        )
        .await?;

    assert_eq!(created.status, AppointmentStatusDto::Scheduled);
    assert_eq!(created.start_time, at(9, 0));
    assert_eq!(created.customer_full_name, Some(customer.full_name));
    assert_eq!(created.staff_full_name, Some(staff.full_name));
    assert_eq!(created.services.len(), 1);
    assert_eq!(created.services[0].service_id, service.id);
    assert_eq!(created.services[0].price, service.price);

    Ok(())
}

/// A conflicting create is rejected with 409 semantics and writes nothing.
#[tokio::test]
async fn rejects_conflicting_create_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    let appointment_service = AppointmentService::new(db);
    appointment_service
        .create(
            business.id,
            create_dto(customer.id, staff.id, at(9, 0), vec![service.id]),
        )
        .await?;

    let result = appointment_service
        .create(
            business.id,
            create_dto(customer.id, staff.id, at(9, 15), vec![service.id]),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingConflict { conflicts: 1 })
    ));

    let count = entity::prelude::Appointment::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Re-saving an appointment at its own time passes the guard via
/// self-exclusion.
#[tokio::test]
async fn update_to_same_time_is_accepted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    let appointment_service = AppointmentService::new(db);
    let created = appointment_service
        .create(
            business.id,
            create_dto(customer.id, staff.id, at(9, 0), vec![service.id]),
        )
        .await?;

    let updated = appointment_service
        .update(
            business.id,
            created.id,
            UpdateAppointmentDto {
                start_time: Some(at(9, 0)),
                service_ids: Some(vec![service.id]),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.start_time, at(9, 0));

    Ok(())
}

/// Moving an appointment onto another booking is rejected.
#[tokio::test]
async fn update_to_conflicting_time_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    let appointment_service = AppointmentService::new(db);
    appointment_service
        .create(
            business.id,
            create_dto(customer.id, staff.id, at(9, 0), vec![service.id]),
        )
        .await?;
    let movable = appointment_service
        .create(
            business.id,
            create_dto(customer.id, staff.id, at(11, 0), vec![service.id]),
        )
        .await?;

    let result = appointment_service
        .update(
            business.id,
            movable.id,
            UpdateAppointmentDto {
                start_time: Some(at(9, 15)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BookingConflict { .. })));

    // The original time survives the rolled-back attempt.
    let unchanged = appointment_service
        .get(business.id, movable.id)
        .await?
        .unwrap();
    assert_eq!(unchanged.start_time, at(11, 0));

    Ok(())
}

/// A note-only update skips the guard even while the calendar around the
/// appointment is fully booked.
#[tokio::test]
async fn note_only_update_skips_conflict_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    let appointment_service = AppointmentService::new(db);
    let created = appointment_service
        .create(
            business.id,
            create_dto(customer.id, staff.id, at(9, 0), vec![service.id]),
        )
        .await?;

    let updated = appointment_service
        .update(
            business.id,
            created.id,
            UpdateAppointmentDto {
                notes: Some("rescheduling discussed".to_string()),
                admin_note: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.notes, Some("rescheduling discussed".to_string()));
    // Blank note input collapses to NULL.
    assert_eq!(updated.admin_note, None);

    Ok(())
}

/// Cancelling frees the slot for a new booking.
#[tokio::test]
async fn cancelled_appointment_frees_the_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    let appointment_service = AppointmentService::new(db);
    let first = appointment_service
        .create(
            business.id,
            create_dto(customer.id, staff.id, at(9, 0), vec![service.id]),
        )
        .await?;

    appointment_service
        .update_status(business.id, first.id, AppointmentStatusDto::Cancelled)
        .await?;

    let second = appointment_service
        .create(
            business.id,
            create_dto(customer.id, staff.id, at(9, 0), vec![service.id]),
        )
        .await?;

    assert_eq!(second.start_time, at(9, 0));

    Ok(())
}

/// Unknown references surface as NotFound before any booking work happens.
#[tokio::test]
async fn rejects_unknown_customer_or_staff() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    factory::settings::create_settings(db, business.id).await?;

    let appointment_service = AppointmentService::new(db);

    let bad_customer = appointment_service
        .create(
            business.id,
            create_dto(999999, staff.id, at(9, 0), vec![service.id]),
        )
        .await;
    assert!(matches!(bad_customer, Err(AppError::NotFound(_))));

    let bad_staff = appointment_service
        .create(
            business.id,
            create_dto(customer.id, 999999, at(9, 0), vec![service.id]),
        )
        .await;
    assert!(matches!(bad_staff, Err(AppError::NotFound(_))));

    Ok(())
}
