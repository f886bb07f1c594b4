use sea_orm::DatabaseConnection;

use crate::{
    model::business::{BusinessDto, CreateBusinessDto},
    server::{data::business::BusinessRepository, error::AppError},
};

pub struct BusinessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new business (tenant bootstrap)
    ///
    /// # Returns
    /// - `Ok(BusinessDto)`: The created business
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, dto: CreateBusinessDto) -> Result<BusinessDto, AppError> {
        let business = BusinessRepository::new(self.db)
            .create(dto.name, dto.email, dto.phone, dto.address)
            .await?;

        Ok(business.into())
    }

    /// Gets a business by ID
    ///
    /// # Returns
    /// - `Ok(Some(BusinessDto))`: Business found
    /// - `Ok(None)`: Business not found
    /// - `Err(AppError)`: Database error
    pub async fn get(&self, id: i32) -> Result<Option<BusinessDto>, AppError> {
        Ok(BusinessRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Into::into))
    }
}
