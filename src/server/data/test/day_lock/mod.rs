use crate::server::data::day_lock::StaffDayLockRepository;
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod lock_days;
mod touch;
