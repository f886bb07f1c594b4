use super::*;

/// Tests the active-staff lookup used by booking and availability.
///
/// Expected: Ok(Some) for an active staff member
#[tokio::test]
async fn finds_active_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let staff = factory::staff::create_staff(db, business.id).await?;

    let repo = StaffRepository::new(db);
    let found = repo.find_active(business.id, staff.id).await?;

    assert_eq!(found.map(|s| s.id), Some(staff.id));

    Ok(())
}

/// Tests that inactive staff are indistinguishable from missing ones.
///
/// Expected: Ok(None) for a deactivated staff member
#[tokio::test]
async fn excludes_inactive_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let staff = factory::staff::StaffFactory::new(db, business.id)
        .is_active(false)
        .build()
        .await?;

    let repo = StaffRepository::new(db);
    let found = repo.find_active(business.id, staff.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests tenant scoping of the active-staff lookup.
///
/// Expected: Ok(None) when querying through another business
#[tokio::test]
async fn excludes_foreign_tenant_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let other_business = factory::business::create_business(db).await?;
    let staff = factory::staff::create_staff(db, business.id).await?;

    let repo = StaffRepository::new(db);
    let found = repo.find_active(other_business.id, staff.id).await?;

    assert!(found.is_none());

    Ok(())
}
