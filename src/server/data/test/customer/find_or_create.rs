use super::*;

/// Tests customer creation when the email is unknown.
///
/// Expected: Ok with a new customer row
#[tokio::test]
async fn creates_customer_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;

    let repo = CustomerRepository::new(db);
    let customer = repo
        .find_or_create(
            business.id,
            "Jamie Doe".to_string(),
            "jamie@example.com".to_string(),
            None,
        )
        .await?;

    assert_eq!(customer.business_id, business.id);
    assert_eq!(customer.email, "jamie@example.com");

    Ok(())
}

/// Tests customer reuse on an email match.
///
/// The existing row is returned as-is; the supplied name does not
/// overwrite it.
///
/// Expected: Ok with the original customer, row count unchanged
#[tokio::test]
async fn returns_existing_customer_on_email_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let existing = factory::customer::CustomerFactory::new(db, business.id)
        .email("repeat@example.com")
        .full_name("Original Name")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let found = repo
        .find_or_create(
            business.id,
            "Different Name".to_string(),
            "repeat@example.com".to_string(),
            None,
        )
        .await?;

    assert_eq!(found.id, existing.id);
    assert_eq!(found.full_name, "Original Name");

    let count = entity::prelude::Customer::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the email match is tenant-scoped.
///
/// The same email under another business is a different customer.
///
/// Expected: Ok with a second, separate customer row
#[tokio::test]
async fn same_email_under_other_tenant_creates_new_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::create_business(db).await?;
    let other_business = factory::business::create_business(db).await?;
    let existing = factory::customer::CustomerFactory::new(db, business.id)
        .email("shared@example.com")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let other = repo
        .find_or_create(
            other_business.id,
            "Someone Else".to_string(),
            "shared@example.com".to_string(),
            None,
        )
        .await?;

    assert_ne!(other.id, existing.id);
    assert_eq!(other.business_id, other_business.id);

    Ok(())
}
