use crate::{
    model::settings::UpdateSettingsDto,
    server::data::settings::{
        SettingsRepository, DEFAULT_BUFFER_TIME_MINUTES, DEFAULT_CANCELLATION_HOURS,
        DEFAULT_SLOT_LENGTH_MINUTES,
    },
};
use chrono::NaiveTime;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
