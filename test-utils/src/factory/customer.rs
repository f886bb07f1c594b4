//! Customer factory for creating test customer entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: i32,
    full_name: String,
    email: String,
    phone: Option<String>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Customer {id}"` where id is auto-incremented
    /// - email: `"customer{id}@example.com"`
    /// - phone: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `business_id` - Business the customer belongs to
    ///
    /// # Returns
    /// - `CustomerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, business_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            business_id,
            full_name: format!("Customer {}", id),
            email: format!("customer{}@example.com", id),
            phone: None,
        }
    }

    /// Sets the customer's full name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the customer's email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the customer's phone number.
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Builds and inserts the customer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customer::Model)` - Created customer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            id: ActiveValue::NotSet,
            business_id: ActiveValue::Set(self.business_id),
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values for the specified business.
///
/// Shorthand for `CustomerFactory::new(db, business_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `business_id` - Business the customer belongs to
///
/// # Returns
/// - `Ok(entity::customer::Model)` - Created customer entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_customer(
    db: &DatabaseConnection,
    business_id: i32,
) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db, business_id).build().await
}
