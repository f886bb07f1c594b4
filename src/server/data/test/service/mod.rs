use crate::server::data::service::ServiceRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active_by_ids;
