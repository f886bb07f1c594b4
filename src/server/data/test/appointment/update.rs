use super::*;

/// Tests partial field updates.
///
/// Verifies that only provided fields change and that `Some(None)` on a
/// note field clears it.
///
/// Expected: Ok with start time moved, status changed, note cleared
#[tokio::test]
async fn applies_partial_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;

    let appointment =
        factory::appointment::AppointmentFactory::new(db, business.id, customer.id, staff.id)
            .services(&[service.clone()])
            .build()
            .await?;

    entity::appointment::ActiveModel {
        id: sea_orm::ActiveValue::Unchanged(appointment.id),
        admin_note: sea_orm::ActiveValue::Set(Some("internal".to_string())),
        ..Default::default()
    }
    .update(db)
    .await?;

    let new_start = Utc::now() + Duration::hours(8);
    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update(
            business.id,
            appointment.id,
            UpdateAppointmentFields {
                start_time: Some(new_start),
                status: Some(AppointmentStatus::Completed),
                admin_note: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.start_time, new_start);
    assert_eq!(updated.status, AppointmentStatus::Completed);
    assert_eq!(updated.admin_note, None);
    assert_eq!(updated.customer_id, appointment.customer_id);
    assert_eq!(updated.notes, appointment.notes);

    Ok(())
}

/// Tests that updating a foreign-tenant appointment fails.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn rejects_foreign_tenant_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let other_business = factory::business::create_business(db).await?;

    let appointment = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        Utc::now() + Duration::hours(2),
        &[service.clone()],
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .update(
            other_business.id,
            appointment.id,
            UpdateAppointmentFields {
                status: Some(AppointmentStatus::Completed),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests replacing service associations.
///
/// Expected: Ok with old snapshots gone and new ones written
#[tokio::test]
async fn replace_services_rewrites_snapshots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, customer, staff, old_service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let new_service =
        factory::service::create_service_with_duration(db, business.id, 60).await?;

    let appointment = factory::appointment::create_appointment(
        db,
        business.id,
        customer.id,
        staff.id,
        Utc::now() + Duration::hours(2),
        &[old_service.clone()],
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    repo.replace_services(appointment.id, &[new_service.clone()])
        .await?;

    let snapshots = entity::prelude::AppointmentService::find()
        .filter(entity::appointment_service::Column::AppointmentId.eq(appointment.id))
        .all(db)
        .await?;
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].service_id, new_service.id);
    assert_eq!(snapshots[0].price, new_service.price);

    Ok(())
}
