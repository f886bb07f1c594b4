use super::*;

/// Tests lazy creation of tenant settings with fixed defaults.
///
/// Expected: Ok with slot=30, buffer=15, cancellation=24, 09:00-18:00
/// working hours and the supplied default timezone
#[tokio::test]
async fn creates_defaults_on_first_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;

    let repo = SettingsRepository::new(db);
    let settings = repo.get_or_create(business.id, "Europe/Istanbul").await?;

    assert_eq!(settings.business_id, business.id);
    assert_eq!(settings.slot_length_minutes, DEFAULT_SLOT_LENGTH_MINUTES);
    assert_eq!(settings.buffer_time_minutes, DEFAULT_BUFFER_TIME_MINUTES);
    assert_eq!(settings.cancellation_hours, DEFAULT_CANCELLATION_HOURS);
    assert_eq!(
        settings.working_hours_start,
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    );
    assert_eq!(
        settings.working_hours_end,
        NaiveTime::from_hms_opt(18, 0, 0).unwrap()
    );
    assert_eq!(settings.time_zone, "Europe/Istanbul");

    Ok(())
}

/// Tests that an existing row is returned untouched.
///
/// Expected: Ok with the factory-created values, not the defaults
#[tokio::test]
async fn returns_existing_row_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let existing = factory::settings::SettingsFactory::new(db, business.id)
        .slot_length_minutes(15)
        .buffer_time_minutes(5)
        .time_zone("America/New_York")
        .build()
        .await?;

    let repo = SettingsRepository::new(db);
    let settings = repo.get_or_create(business.id, "UTC").await?;

    assert_eq!(settings.id, existing.id);
    assert_eq!(settings.slot_length_minutes, 15);
    assert_eq!(settings.buffer_time_minutes, 5);
    assert_eq!(settings.time_zone, "America/New_York");

    let count = entity::prelude::BusinessSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests the partial-update upsert.
///
/// Expected: Ok with updated buffer, everything else untouched
#[tokio::test]
async fn upsert_applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;

    let repo = SettingsRepository::new(db);
    let updated = repo
        .upsert(
            business.id,
            UpdateSettingsDto {
                buffer_time_minutes: Some(20),
                ..Default::default()
            },
            "UTC",
        )
        .await?;

    assert_eq!(updated.buffer_time_minutes, 20);
    assert_eq!(updated.slot_length_minutes, DEFAULT_SLOT_LENGTH_MINUTES);
    assert_eq!(updated.time_zone, "UTC");

    Ok(())
}
