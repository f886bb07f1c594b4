use sea_orm::DatabaseConnection;

use crate::{
    model::service::{CreateServiceDto, ServiceDto, UpdateServiceDto},
    server::{data::service::ServiceRepository, error::AppError},
};

/// CRUD over a business's service catalog.
///
/// Services are deactivated, never deleted: historical appointments keep
/// their duration and price snapshots valid.
pub struct ServiceCatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceCatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new catalog service
    ///
    /// # Returns
    /// - `Ok(ServiceDto)`: The created service
    /// - `Err(AppError::BadRequest)`: Non-positive duration
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        business_id: i32,
        dto: CreateServiceDto,
    ) -> Result<ServiceDto, AppError> {
        if dto.duration_minutes <= 0 {
            return Err(AppError::BadRequest(
                "duration_minutes must be positive".to_string(),
            ));
        }

        let service = ServiceRepository::new(self.db)
            .create(
                business_id,
                dto.name,
                dto.description,
                dto.duration_minutes,
                dto.price,
                dto.is_active,
            )
            .await?;

        Ok(service.into())
    }

    /// Gets a service by ID
    ///
    /// # Returns
    /// - `Ok(Some(ServiceDto))`: Service found
    /// - `Ok(None)`: Service not found for this business
    /// - `Err(AppError)`: Database error
    pub async fn get(&self, business_id: i32, id: i32) -> Result<Option<ServiceDto>, AppError> {
        Ok(ServiceRepository::new(self.db)
            .find_by_id(business_id, id)
            .await?
            .map(Into::into))
    }

    /// Lists the business's services, ordered by name
    ///
    /// # Returns
    /// - `Ok(Vec<ServiceDto>)`: All services, active and inactive
    /// - `Err(AppError)`: Database error
    pub async fn list(&self, business_id: i32) -> Result<Vec<ServiceDto>, AppError> {
        Ok(ServiceRepository::new(self.db)
            .list(business_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Updates a service's catalog fields
    ///
    /// # Returns
    /// - `Ok(ServiceDto)`: The updated service
    /// - `Err(AppError::NotFound)`: Service not found for this business
    /// - `Err(AppError::BadRequest)`: Non-positive duration
    /// - `Err(AppError)`: Database error
    pub async fn update(
        &self,
        business_id: i32,
        id: i32,
        dto: UpdateServiceDto,
    ) -> Result<ServiceDto, AppError> {
        if matches!(dto.duration_minutes, Some(duration) if duration <= 0) {
            return Err(AppError::BadRequest(
                "duration_minutes must be positive".to_string(),
            ));
        }

        ServiceRepository::new(self.db)
            .update(
                business_id,
                id,
                dto.name,
                dto.description,
                dto.duration_minutes,
                dto.price,
                dto.is_active,
            )
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }
}
