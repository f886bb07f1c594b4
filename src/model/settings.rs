use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Partial update for a business's scheduling settings.
///
/// Fields left out keep their current value; on first write for a tenant
/// the missing fields fall back to the lazy-creation defaults.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateSettingsDto {
    pub slot_length_minutes: Option<i32>,
    pub buffer_time_minutes: Option<i32>,
    pub cancellation_hours: Option<i32>,
    #[schema(value_type = Option<String>, example = "09:00:00")]
    pub working_hours_start: Option<NaiveTime>,
    #[schema(value_type = Option<String>, example = "18:00:00")]
    pub working_hours_end: Option<NaiveTime>,
    pub time_zone: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SettingsDto {
    pub id: i32,
    pub business_id: i32,
    pub slot_length_minutes: i32,
    pub buffer_time_minutes: i32,
    pub cancellation_hours: i32,
    #[schema(value_type = String, example = "09:00:00")]
    pub working_hours_start: NaiveTime,
    #[schema(value_type = String, example = "18:00:00")]
    pub working_hours_end: NaiveTime,
    pub time_zone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::business_settings::Model> for SettingsDto {
    fn from(model: entity::business_settings::Model) -> Self {
        Self {
            id: model.id,
            business_id: model.business_id,
            slot_length_minutes: model.slot_length_minutes,
            buffer_time_minutes: model.buffer_time_minutes,
            cancellation_hours: model.cancellation_hours,
            working_hours_start: model.working_hours_start,
            working_hours_end: model.working_hours_end,
            time_zone: model.time_zone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
