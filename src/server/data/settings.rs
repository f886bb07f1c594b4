use chrono::{NaiveTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::settings::UpdateSettingsDto;

/// Defaults applied when a tenant's settings row is created lazily.
pub const DEFAULT_SLOT_LENGTH_MINUTES: i32 = 30;
pub const DEFAULT_BUFFER_TIME_MINUTES: i32 = 15;
pub const DEFAULT_CANCELLATION_HOURS: i32 = 24;

/// 09:00, start of the default working window.
pub fn default_working_hours_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// 18:00, end of the default working window.
pub fn default_working_hours_end() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub struct SettingsRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a business's settings row if one exists
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Settings found
    /// - `Ok(None)`: Settings not yet created for this business
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_business(
        &self,
        business_id: i32,
    ) -> Result<Option<entity::business_settings::Model>, DbErr> {
        entity::prelude::BusinessSettings::find()
            .filter(entity::business_settings::Column::BusinessId.eq(business_id))
            .one(self.db)
            .await
    }

    /// Gets a business's settings, creating the row with defaults on first
    /// read.
    ///
    /// Two readers racing to create the row are serialized by the unique
    /// `business_id` column: the losing insert is a no-op and the row is
    /// re-read afterwards.
    ///
    /// # Arguments
    /// - `business_id`: Tenant scope
    /// - `default_time_zone`: IANA zone to store when creating the row
    ///
    /// # Returns
    /// - `Ok(Model)`: Existing or newly created settings
    /// - `Err(DbErr)`: Database error
    pub async fn get_or_create(
        &self,
        business_id: i32,
        default_time_zone: &str,
    ) -> Result<entity::business_settings::Model, DbErr> {
        if let Some(settings) = self.find_by_business(business_id).await? {
            return Ok(settings);
        }

        entity::prelude::BusinessSettings::insert(entity::business_settings::ActiveModel {
            business_id: ActiveValue::Set(business_id),
            slot_length_minutes: ActiveValue::Set(DEFAULT_SLOT_LENGTH_MINUTES),
            buffer_time_minutes: ActiveValue::Set(DEFAULT_BUFFER_TIME_MINUTES),
            cancellation_hours: ActiveValue::Set(DEFAULT_CANCELLATION_HOURS),
            working_hours_start: ActiveValue::Set(default_working_hours_start()),
            working_hours_end: ActiveValue::Set(default_working_hours_end()),
            time_zone: ActiveValue::Set(default_time_zone.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::business_settings::Column::BusinessId)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        self.find_by_business(business_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("business_settings for business {}", business_id))
        })
    }

    /// Applies a partial settings update, creating the row when absent.
    ///
    /// Fields not present in the update fall back to the current value, or
    /// to the lazy-creation defaults when the row is being created.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated settings
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        business_id: i32,
        update: UpdateSettingsDto,
        default_time_zone: &str,
    ) -> Result<entity::business_settings::Model, DbErr> {
        let current = self.get_or_create(business_id, default_time_zone).await?;

        let mut active_model: entity::business_settings::ActiveModel = current.into();

        if let Some(slot_length_minutes) = update.slot_length_minutes {
            active_model.slot_length_minutes = ActiveValue::Set(slot_length_minutes);
        }
        if let Some(buffer_time_minutes) = update.buffer_time_minutes {
            active_model.buffer_time_minutes = ActiveValue::Set(buffer_time_minutes);
        }
        if let Some(cancellation_hours) = update.cancellation_hours {
            active_model.cancellation_hours = ActiveValue::Set(cancellation_hours);
        }
        if let Some(working_hours_start) = update.working_hours_start {
            active_model.working_hours_start = ActiveValue::Set(working_hours_start);
        }
        if let Some(working_hours_end) = update.working_hours_end {
            active_model.working_hours_end = ActiveValue::Set(working_hours_end);
        }
        if let Some(time_zone) = update.time_zone {
            active_model.time_zone = ActiveValue::Set(time_zone);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }
}
