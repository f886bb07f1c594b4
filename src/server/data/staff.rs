use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct StaffRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StaffRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new staff member for a business
    ///
    /// # Returns
    /// - `Ok(Model)`: The created staff member
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        business_id: i32,
        full_name: String,
        email: Option<String>,
        phone: Option<String>,
        is_active: bool,
    ) -> Result<entity::staff::Model, DbErr> {
        entity::staff::ActiveModel {
            business_id: ActiveValue::Set(business_id),
            full_name: ActiveValue::Set(full_name),
            email: ActiveValue::Set(email),
            phone: ActiveValue::Set(phone),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a staff member by ID, scoped to the business
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Staff member found and belongs to the business
    /// - `Ok(None)`: Staff member not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(
        &self,
        business_id: i32,
        id: i32,
    ) -> Result<Option<entity::staff::Model>, DbErr> {
        entity::prelude::Staff::find_by_id(id)
            .filter(entity::staff::Column::BusinessId.eq(business_id))
            .one(self.db)
            .await
    }

    /// Gets an *active* staff member by ID, scoped to the business.
    ///
    /// Booking and availability flows use this so inactive or
    /// foreign-tenant staff are indistinguishable from missing ones.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Active staff member found
    /// - `Ok(None)`: Staff member missing, inactive, or foreign-tenant
    /// - `Err(DbErr)`: Database error
    pub async fn find_active(
        &self,
        business_id: i32,
        id: i32,
    ) -> Result<Option<entity::staff::Model>, DbErr> {
        entity::prelude::Staff::find_by_id(id)
            .filter(entity::staff::Column::BusinessId.eq(business_id))
            .filter(entity::staff::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Lists all staff for a business, ordered by name
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Staff for the business (active and inactive)
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self, business_id: i32) -> Result<Vec<entity::staff::Model>, DbErr> {
        entity::prelude::Staff::find()
            .filter(entity::staff::Column::BusinessId.eq(business_id))
            .order_by_asc(entity::staff::Column::FullName)
            .all(self.db)
            .await
    }

    /// Updates a staff member's fields
    ///
    /// # Arguments
    /// - `business_id`: Tenant scope
    /// - `id`: Staff ID
    /// - remaining arguments: new values, `None` leaves the field untouched
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated staff member
    /// - `Ok(None)`: Staff member not found for this business
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        business_id: i32,
        id: i32,
        full_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Option<entity::staff::Model>, DbErr> {
        let Some(staff) = self.find_by_id(business_id, id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::staff::ActiveModel = staff.into();

        if let Some(full_name) = full_name {
            active_model.full_name = ActiveValue::Set(full_name);
        }
        if let Some(email) = email {
            active_model.email = ActiveValue::Set(Some(email));
        }
        if let Some(phone) = phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(is_active) = is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }
}
