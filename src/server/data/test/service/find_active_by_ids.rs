use super::*;

/// Tests the tenant-safe active-service lookup.
///
/// Requesting an active service, an inactive one, and a foreign-tenant one
/// must return only the active same-tenant row; the caller detects the
/// shortfall by comparing counts.
///
/// Expected: Ok with exactly the active same-tenant service
#[tokio::test]
async fn returns_only_active_same_tenant_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let other_business = factory::business::create_business(db).await?;

    let active = factory::service::create_service(db, business.id).await?;
    let inactive = factory::service::ServiceFactory::new(db, business.id)
        .is_active(false)
        .build()
        .await?;
    let foreign = factory::service::create_service(db, other_business.id).await?;

    let repo = ServiceRepository::new(db);
    let found = repo
        .find_active_by_ids(business.id, &[active.id, inactive.id, foreign.id])
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, active.id);

    Ok(())
}

/// Tests the lookup with no matching ids.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn unknown_ids_yield_empty_result() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;

    let repo = ServiceRepository::new(db);
    let found = repo.find_active_by_ids(business.id, &[999998, 999999]).await?;

    assert!(found.is_empty());

    Ok(())
}
