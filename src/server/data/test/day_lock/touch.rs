use super::*;

/// Tests first-touch creation of a day-lock marker.
///
/// Expected: Ok with exactly one row for the (business, staff, day) key
#[tokio::test]
async fn creates_marker_on_first_touch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let staff = factory::staff::create_staff(db, business.id).await?;
    let day = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();

    let repo = StaffDayLockRepository::new(db);
    repo.touch(business.id, staff.id, day).await?;

    let row = entity::prelude::StaffDayLock::find_by_id((business.id, staff.id, day))
        .one(db)
        .await?;
    assert!(row.is_some());

    Ok(())
}

/// Tests upsert idempotency.
///
/// Touching an already-marked day must neither fail nor create a second
/// row; concurrent booking attempts rely on this being a silent no-op.
///
/// Expected: Ok with still exactly one row after repeated touches
#[tokio::test]
async fn repeated_touch_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let staff = factory::staff::create_staff(db, business.id).await?;
    let day = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();

    let repo = StaffDayLockRepository::new(db);
    repo.touch(business.id, staff.id, day).await?;
    repo.touch(business.id, staff.id, day).await?;
    repo.touch(business.id, staff.id, day).await?;

    let count = entity::prelude::StaffDayLock::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the marker can be locked after touching.
///
/// Expected: Ok (the lock clause degrades to a plain read on SQLite; the
/// statement itself must still be well-formed)
#[tokio::test]
async fn acquire_after_touch_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let staff = factory::staff::create_staff(db, business.id).await?;
    let day = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();

    let repo = StaffDayLockRepository::new(db);
    repo.touch(business.id, staff.id, day).await?;
    repo.acquire(business.id, staff.id, day).await?;

    Ok(())
}
