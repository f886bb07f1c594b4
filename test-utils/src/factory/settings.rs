//! Business settings factory for creating test scheduling configuration.

use chrono::{NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test business settings with customizable fields.
///
/// Defaults mirror the lazily-created production settings: 30 minute slots,
/// 15 minute buffer, 09:00-18:00 working hours, UTC timezone.
pub struct SettingsFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: i32,
    slot_length_minutes: i32,
    buffer_time_minutes: i32,
    cancellation_hours: i32,
    working_hours_start: NaiveTime,
    working_hours_end: NaiveTime,
    time_zone: String,
}

impl<'a> SettingsFactory<'a> {
    /// Creates a new SettingsFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `business_id` - Business the settings belong to
    ///
    /// # Returns
    /// - `SettingsFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, business_id: i32) -> Self {
        Self {
            db,
            business_id,
            slot_length_minutes: 30,
            buffer_time_minutes: 15,
            cancellation_hours: 24,
            working_hours_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            working_hours_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            time_zone: "UTC".to_string(),
        }
    }

    /// Sets the slot generation step in minutes.
    pub fn slot_length_minutes(mut self, slot_length_minutes: i32) -> Self {
        self.slot_length_minutes = slot_length_minutes;
        self
    }

    /// Sets the symmetric buffer applied around appointments.
    pub fn buffer_time_minutes(mut self, buffer_time_minutes: i32) -> Self {
        self.buffer_time_minutes = buffer_time_minutes;
        self
    }

    /// Sets the start of the working-hours window.
    pub fn working_hours_start(mut self, working_hours_start: NaiveTime) -> Self {
        self.working_hours_start = working_hours_start;
        self
    }

    /// Sets the end of the working-hours window.
    pub fn working_hours_end(mut self, working_hours_end: NaiveTime) -> Self {
        self.working_hours_end = working_hours_end;
        self
    }

    /// Sets the IANA timezone name.
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = time_zone.into();
        self
    }

    /// Builds and inserts the settings entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::business_settings::Model)` - Created settings entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::business_settings::Model, DbErr> {
        entity::business_settings::ActiveModel {
            id: ActiveValue::NotSet,
            business_id: ActiveValue::Set(self.business_id),
            slot_length_minutes: ActiveValue::Set(self.slot_length_minutes),
            buffer_time_minutes: ActiveValue::Set(self.buffer_time_minutes),
            cancellation_hours: ActiveValue::Set(self.cancellation_hours),
            working_hours_start: ActiveValue::Set(self.working_hours_start),
            working_hours_end: ActiveValue::Set(self.working_hours_end),
            time_zone: ActiveValue::Set(self.time_zone),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates settings with default values for the specified business.
///
/// Shorthand for `SettingsFactory::new(db, business_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `business_id` - Business the settings belong to
///
/// # Returns
/// - `Ok(entity::business_settings::Model)` - Created settings entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_settings(
    db: &DatabaseConnection,
    business_id: i32,
) -> Result<entity::business_settings::Model, DbErr> {
    SettingsFactory::new(db, business_id).build().await
}
