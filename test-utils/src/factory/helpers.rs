//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a business with the entities every booking needs.
///
/// This is a convenience method that creates:
/// 1. Business (the tenant)
/// 2. Customer
/// 3. Staff member (active)
/// 4. Service (active, 30 minutes)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((business, customer, staff, service))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::business::Model,
        entity::customer::Model,
        entity::staff::Model,
        entity::service::Model,
    ),
    DbErr,
> {
    let business = crate::factory::business::create_business(db).await?;
    let customer = crate::factory::customer::create_customer(db, business.id).await?;
    let staff = crate::factory::staff::create_staff(db, business.id).await?;
    let service = crate::factory::service::create_service(db, business.id).await?;

    Ok((business, customer, staff, service))
}
