use sea_orm::DatabaseConnection;

use crate::{
    model::staff::{CreateStaffDto, StaffDto, UpdateStaffDto},
    server::{data::staff::StaffRepository, error::AppError},
};

/// CRUD over a business's staff roster.
///
/// Staff are deactivated, never deleted; deactivation stops new bookings
/// but leaves the existing calendar untouched.
pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new staff member
    ///
    /// # Returns
    /// - `Ok(StaffDto)`: The created staff member
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        business_id: i32,
        dto: CreateStaffDto,
    ) -> Result<StaffDto, AppError> {
        let staff = StaffRepository::new(self.db)
            .create(business_id, dto.full_name, dto.email, dto.phone, dto.is_active)
            .await?;

        Ok(staff.into())
    }

    /// Gets a staff member by ID
    ///
    /// # Returns
    /// - `Ok(Some(StaffDto))`: Staff member found
    /// - `Ok(None)`: Staff member not found for this business
    /// - `Err(AppError)`: Database error
    pub async fn get(&self, business_id: i32, id: i32) -> Result<Option<StaffDto>, AppError> {
        Ok(StaffRepository::new(self.db)
            .find_by_id(business_id, id)
            .await?
            .map(Into::into))
    }

    /// Lists the business's staff, ordered by name
    ///
    /// # Returns
    /// - `Ok(Vec<StaffDto>)`: All staff, active and inactive
    /// - `Err(AppError)`: Database error
    pub async fn list(&self, business_id: i32) -> Result<Vec<StaffDto>, AppError> {
        Ok(StaffRepository::new(self.db)
            .list(business_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Updates a staff member's fields
    ///
    /// # Returns
    /// - `Ok(StaffDto)`: The updated staff member
    /// - `Err(AppError::NotFound)`: Staff member not found for this business
    /// - `Err(AppError)`: Database error
    pub async fn update(
        &self,
        business_id: i32,
        id: i32,
        dto: UpdateStaffDto,
    ) -> Result<StaffDto, AppError> {
        StaffRepository::new(self.db)
            .update(business_id, id, dto.full_name, dto.email, dto.phone, dto.is_active)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Staff not found".to_string()))
    }
}
