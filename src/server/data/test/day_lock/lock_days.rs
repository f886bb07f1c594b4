use super::*;

/// Tests multi-day locking with out-of-order input.
///
/// `lock_days` must create a marker for every day regardless of the order
/// in which the window derivation produced them.
///
/// Expected: Ok with one row per day
#[tokio::test]
async fn creates_markers_for_all_days_given_unsorted_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let staff = factory::staff::create_staff(db, business.id).await?;

    let d1 = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();
    let d2 = NaiveDate::from_ymd_opt(2026, 9, 15).unwrap();
    let d3 = NaiveDate::from_ymd_opt(2026, 9, 16).unwrap();

    let repo = StaffDayLockRepository::new(db);
    // Deliberately unsorted and with a duplicate.
    repo.lock_days(business.id, staff.id, &[d3, d1, d2, d1]).await?;

    for day in [d1, d2, d3] {
        let row = entity::prelude::StaffDayLock::find_by_id((business.id, staff.id, day))
            .one(db)
            .await?;
        assert!(row.is_some(), "missing marker for {}", day);
    }
    let count = entity::prelude::StaffDayLock::find().count(db).await?;
    assert_eq!(count, 3);

    Ok(())
}

/// Tests marker reuse across booking attempts.
///
/// Markers persist indefinitely; a second attempt touching the same days
/// reuses them instead of growing the table.
///
/// Expected: Ok with the row count unchanged after a second pass
#[tokio::test]
async fn reuses_existing_markers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let staff = factory::staff::create_staff(db, business.id).await?;

    let d1 = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();
    let d2 = NaiveDate::from_ymd_opt(2026, 9, 15).unwrap();

    let repo = StaffDayLockRepository::new(db);
    repo.lock_days(business.id, staff.id, &[d1, d2]).await?;
    repo.lock_days(business.id, staff.id, &[d1, d2]).await?;

    let count = entity::prelude::StaffDayLock::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests lock isolation between staff members.
///
/// Two staff members' markers for the same day are distinct rows; locking
/// one must not involve the other's.
///
/// Expected: Ok with one row per staff member
#[tokio::test]
async fn markers_are_per_staff_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let staff_a = factory::staff::create_staff(db, business.id).await?;
    let staff_b = factory::staff::create_staff(db, business.id).await?;
    let day = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();

    let repo = StaffDayLockRepository::new(db);
    repo.lock_days(business.id, staff_a.id, &[day]).await?;
    repo.lock_days(business.id, staff_b.id, &[day]).await?;

    let count = entity::prelude::StaffDayLock::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
