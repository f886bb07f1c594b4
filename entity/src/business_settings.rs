use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tenant scheduling configuration.
///
/// One row per business, created lazily with defaults on first read.
/// `working_hours_start`/`working_hours_end` are times-of-day in the
/// tenant's `time_zone`; `buffer_time_minutes` pads every appointment on
/// both sides during conflict checks.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub business_id: i32,
    pub slot_length_minutes: i32,
    pub buffer_time_minutes: i32,
    pub cancellation_hours: i32,
    pub working_hours_start: Time,
    pub working_hours_end: Time,
    pub time_zone: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business::Entity",
        from = "Column::BusinessId",
        to = "super::business::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Business,
}

impl Related<super::business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
