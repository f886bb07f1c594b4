//! Service factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test services with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::service::ServiceFactory;
///
/// let service = ServiceFactory::new(&db, business.id)
///     .duration_minutes(45)
///     .is_active(false)
///     .build()
///     .await?;
/// ```
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: i32,
    name: String,
    description: Option<String>,
    duration_minutes: i32,
    price: Decimal,
    is_active: bool,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new ServiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Service {id}"` where id is auto-incremented
    /// - description: `None`
    /// - duration_minutes: `30`
    /// - price: `25.00`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `business_id` - Business the service belongs to
    ///
    /// # Returns
    /// - `ServiceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, business_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            business_id,
            name: format!("Service {}", id),
            description: None,
            duration_minutes: 30,
            price: Decimal::new(2500, 2),
            is_active: true,
        }
    }

    /// Sets the service name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the service duration in minutes.
    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Sets the service price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Sets whether the service is bookable.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the service entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::service::Model)` - Created service entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            id: ActiveValue::NotSet,
            business_id: ActiveValue::Set(self.business_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            price: ActiveValue::Set(self.price),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active 30-minute service with default values.
///
/// Shorthand for `ServiceFactory::new(db, business_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `business_id` - Business the service belongs to
///
/// # Returns
/// - `Ok(entity::service::Model)` - Created service entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_service(
    db: &DatabaseConnection,
    business_id: i32,
) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db, business_id).build().await
}

/// Creates an active service with the given duration.
///
/// # Arguments
/// - `db` - Database connection
/// - `business_id` - Business the service belongs to
/// - `duration_minutes` - Service duration in minutes
///
/// # Returns
/// - `Ok(entity::service::Model)` - Created service entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_service_with_duration(
    db: &DatabaseConnection,
    business_id: i32,
    duration_minutes: i32,
) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db, business_id)
        .duration_minutes(duration_minutes)
        .build()
        .await
}
