use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ServiceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ServiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new service in the business catalog
    ///
    /// # Returns
    /// - `Ok(Model)`: The created service
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        business_id: i32,
        name: String,
        description: Option<String>,
        duration_minutes: i32,
        price: Decimal,
        is_active: bool,
    ) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            business_id: ActiveValue::Set(business_id),
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            duration_minutes: ActiveValue::Set(duration_minutes),
            price: ActiveValue::Set(price),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a service by ID, scoped to the business
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Service found and belongs to the business
    /// - `Ok(None)`: Service not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(
        &self,
        business_id: i32,
        id: i32,
    ) -> Result<Option<entity::service::Model>, DbErr> {
        entity::prelude::Service::find_by_id(id)
            .filter(entity::service::Column::BusinessId.eq(business_id))
            .one(self.db)
            .await
    }

    /// Fetches the subset of the given service ids that belong to the
    /// business and are active.
    ///
    /// The duration resolver compares the returned count against the
    /// requested distinct count to detect missing, inactive or
    /// foreign-tenant ids; the tenant filter here is what makes that check
    /// tenant-safe.
    ///
    /// # Arguments
    /// - `business_id`: Tenant scope
    /// - `ids`: Distinct service ids to look up
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Matching active services (possibly fewer than requested)
    /// - `Err(DbErr)`: Database error
    pub async fn find_active_by_ids(
        &self,
        business_id: i32,
        ids: &[i32],
    ) -> Result<Vec<entity::service::Model>, DbErr> {
        entity::prelude::Service::find()
            .filter(entity::service::Column::BusinessId.eq(business_id))
            .filter(entity::service::Column::Id.is_in(ids.to_vec()))
            .filter(entity::service::Column::IsActive.eq(true))
            .all(self.db)
            .await
    }

    /// Lists all services for a business, ordered by name
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Services for the business (active and inactive)
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self, business_id: i32) -> Result<Vec<entity::service::Model>, DbErr> {
        entity::prelude::Service::find()
            .filter(entity::service::Column::BusinessId.eq(business_id))
            .order_by_asc(entity::service::Column::Name)
            .all(self.db)
            .await
    }

    /// Updates a service's catalog fields
    ///
    /// # Arguments
    /// - `business_id`: Tenant scope
    /// - `id`: Service ID
    /// - remaining arguments: new values, `None` leaves the field untouched
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated service
    /// - `Ok(None)`: Service not found for this business
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        business_id: i32,
        id: i32,
        name: Option<String>,
        description: Option<String>,
        duration_minutes: Option<i32>,
        price: Option<Decimal>,
        is_active: Option<bool>,
    ) -> Result<Option<entity::service::Model>, DbErr> {
        let Some(service) = self.find_by_id(business_id, id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::service::ActiveModel = service.into();

        if let Some(name) = name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(duration_minutes) = duration_minutes {
            active_model.duration_minutes = ActiveValue::Set(duration_minutes);
        }
        if let Some(price) = price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(is_active) = is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }
}
