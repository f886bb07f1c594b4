use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct BusinessRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusinessRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new business (tenant)
    ///
    /// # Arguments
    /// - `name`: Business display name
    /// - `email`: Contact email
    /// - `phone`: Optional contact phone
    /// - `address`: Optional address
    ///
    /// # Returns
    /// - `Ok(Model)`: The created business
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<entity::business::Model, DbErr> {
        entity::business::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            phone: ActiveValue::Set(phone),
            address: ActiveValue::Set(address),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a business by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Business found
    /// - `Ok(None)`: Business not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::business::Model>, DbErr> {
        entity::prelude::Business::find_by_id(id).one(self.db).await
    }
}
