//! Business factory for creating test tenant entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test businesses with customizable fields.
pub struct BusinessFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
}

impl<'a> BusinessFactory<'a> {
    /// Creates a new BusinessFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Business {id}"` where id is auto-incremented
    /// - email: `"business{id}@example.com"`
    /// - phone/address: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BusinessFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Business {}", id),
            email: format!("business{}@example.com", id),
            phone: None,
            address: None,
        }
    }

    /// Sets the business name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the business contact email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the business phone number.
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the business address.
    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    /// Builds and inserts the business entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::business::Model)` - Created business entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::business::Model, DbErr> {
        entity::business::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            address: ActiveValue::Set(self.address),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a business with default values.
///
/// Shorthand for `BusinessFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::business::Model)` - Created business entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_business(db: &DatabaseConnection) -> Result<entity::business::Model, DbErr> {
    BusinessFactory::new(db).build().await
}
