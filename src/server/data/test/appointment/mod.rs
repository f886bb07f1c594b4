use crate::server::{
    data::appointment::AppointmentRepository,
    model::appointment::{InsertAppointmentParams, UpdateAppointmentFields},
};
use chrono::{Duration, Utc};
use entity::appointment::AppointmentStatus;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_in_window;
mod total_durations;
mod update;
