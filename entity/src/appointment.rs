use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A booked time slot on a staff member's calendar.
///
/// `start_time` is stored in UTC. The occupied length is not stored here;
/// it is always derived from the appointment's associated services.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub business_id: i32,
    pub customer_id: i32,
    pub staff_id: i32,
    pub start_time: DateTimeUtc,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub admin_note: Option<String>,
    pub staff_note: Option<String>,
    pub customer_note: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

/// Appointment lifecycle states.
///
/// Only `Cancelled` frees the calendar: every other status, including the
/// `Pending` request state, occupies the staff member's time during
/// conflict checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "no_show")]
    NoShow,
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
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::StaffId",
        to = "super::staff::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Staff,
    #[sea_orm(has_many = "super::appointment_service::Entity")]
    AppointmentService,
}

impl Related<super::business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl Related<super::appointment_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppointmentService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
