use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct CustomerRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new customer for a business
    ///
    /// # Returns
    /// - `Ok(Model)`: The created customer
    /// - `Err(DbErr)`: Database error (including unique email violations)
    pub async fn create(
        &self,
        business_id: i32,
        full_name: String,
        email: String,
        phone: Option<String>,
    ) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            business_id: ActiveValue::Set(business_id),
            full_name: ActiveValue::Set(full_name),
            email: ActiveValue::Set(email),
            phone: ActiveValue::Set(phone),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a customer by ID, scoped to the business
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Customer found and belongs to the business
    /// - `Ok(None)`: Customer not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(
        &self,
        business_id: i32,
        id: i32,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(id)
            .filter(entity::customer::Column::BusinessId.eq(business_id))
            .one(self.db)
            .await
    }

    /// Finds a customer by email within a business
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Customer with that email exists for the business
    /// - `Ok(None)`: No customer with that email
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_email(
        &self,
        business_id: i32,
        email: &str,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::BusinessId.eq(business_id))
            .filter(entity::customer::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a customer by email, creating one when absent.
    ///
    /// Used by the public booking flow, inside the booking transaction, so
    /// a rejected booking does not leave a stray customer row behind.
    ///
    /// # Returns
    /// - `Ok(Model)`: Existing or newly created customer
    /// - `Err(DbErr)`: Database error
    pub async fn find_or_create(
        &self,
        business_id: i32,
        full_name: String,
        email: String,
        phone: Option<String>,
    ) -> Result<entity::customer::Model, DbErr> {
        if let Some(existing) = self.find_by_email(business_id, &email).await? {
            return Ok(existing);
        }

        self.create(business_id, full_name, email, phone).await
    }

    /// Lists all customers for a business, ordered by name
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Customers for the business
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self, business_id: i32) -> Result<Vec<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::BusinessId.eq(business_id))
            .order_by_asc(entity::customer::Column::FullName)
            .all(self.db)
            .await
    }

    /// Updates a customer's contact details
    ///
    /// # Arguments
    /// - `business_id`: Tenant scope
    /// - `id`: Customer ID
    /// - `full_name` / `email` / `phone`: New values, `None` leaves the field untouched
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated customer
    /// - `Ok(None)`: Customer not found for this business
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        business_id: i32,
        id: i32,
        full_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        let Some(customer) = self.find_by_id(business_id, id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::customer::ActiveModel = customer.into();

        if let Some(full_name) = full_name {
            active_model.full_name = ActiveValue::Set(full_name);
        }
        if let Some(email) = email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }
}
