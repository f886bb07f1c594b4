use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

use crate::{
    model::settings::{SettingsDto, UpdateSettingsDto},
    server::{
        data::settings::SettingsRepository,
        error::{scheduling::SchedulingError, AppError},
    },
};

/// Tenant scheduling-settings management.
pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
    default_time_zone: Tz,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection, default_time_zone: Tz) -> Self {
        Self {
            db,
            default_time_zone,
        }
    }

    /// Gets a business's settings, creating the row with defaults on first
    /// read
    ///
    /// # Returns
    /// - `Ok(SettingsDto)`: Existing or newly created settings
    /// - `Err(AppError)`: Database error
    pub async fn get(&self, business_id: i32) -> Result<SettingsDto, AppError> {
        Ok(SettingsRepository::new(self.db)
            .get_or_create(business_id, self.default_time_zone.name())
            .await?
            .into())
    }

    /// Applies a partial settings update.
    ///
    /// The effective working-hours window (current values overlaid with the
    /// update) must stay valid, and a provided timezone must be a real IANA
    /// name; both are checked before anything is written.
    ///
    /// # Returns
    /// - `Ok(SettingsDto)`: The updated settings
    /// - `Err(AppError::SchedulingErr(InvalidWorkingHours))`: end <= start
    /// - `Err(AppError::BadRequest)`: Unknown timezone name or non-positive
    ///   slot/buffer minutes
    /// - `Err(AppError)`: Database error
    pub async fn update(
        &self,
        business_id: i32,
        dto: UpdateSettingsDto,
    ) -> Result<SettingsDto, AppError> {
        if matches!(dto.slot_length_minutes, Some(slot) if slot <= 0) {
            return Err(AppError::BadRequest(
                "slot_length_minutes must be positive".to_string(),
            ));
        }
        if matches!(dto.buffer_time_minutes, Some(buffer) if buffer < 0) {
            return Err(AppError::BadRequest(
                "buffer_time_minutes cannot be negative".to_string(),
            ));
        }
        if let Some(time_zone) = &dto.time_zone {
            time_zone.parse::<Tz>().map_err(|_| {
                AppError::BadRequest(format!("Unknown timezone name: {}", time_zone))
            })?;
        }

        let repository = SettingsRepository::new(self.db);

        let current = repository
            .get_or_create(business_id, self.default_time_zone.name())
            .await?;
        let effective_start = dto.working_hours_start.unwrap_or(current.working_hours_start);
        let effective_end = dto.working_hours_end.unwrap_or(current.working_hours_end);
        if effective_end <= effective_start {
            return Err(AppError::SchedulingErr(SchedulingError::InvalidWorkingHours));
        }

        Ok(repository
            .upsert(business_id, dto, self.default_time_zone.name())
            .await?
            .into())
    }
}
