//! Staff factory for creating test staff entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff members with customizable fields.
pub struct StaffFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: i32,
    full_name: String,
    email: Option<String>,
    phone: Option<String>,
    is_active: bool,
}

impl<'a> StaffFactory<'a> {
    /// Creates a new StaffFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Staff {id}"` where id is auto-incremented
    /// - email: `Some("staff{id}@example.com")`
    /// - phone: `None`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `business_id` - Business the staff member belongs to
    ///
    /// # Returns
    /// - `StaffFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, business_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            business_id,
            full_name: format!("Staff {}", id),
            email: Some(format!("staff{}@example.com", id)),
            phone: None,
            is_active: true,
        }
    }

    /// Sets the staff member's full name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets whether the staff member can receive bookings.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the staff entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::staff::Model)` - Created staff entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::staff::Model, DbErr> {
        entity::staff::ActiveModel {
            id: ActiveValue::NotSet,
            business_id: ActiveValue::Set(self.business_id),
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active staff member with default values.
///
/// Shorthand for `StaffFactory::new(db, business_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `business_id` - Business the staff member belongs to
///
/// # Returns
/// - `Ok(entity::staff::Model)` - Created staff entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_staff(
    db: &DatabaseConnection,
    business_id: i32,
) -> Result<entity::staff::Model, DbErr> {
    StaffFactory::new(db, business_id).build().await
}
