pub use sea_orm_migration::prelude::*;

mod m20260605_000001_create_business_table;
mod m20260605_000002_create_customer_table;
mod m20260605_000003_create_service_table;
mod m20260605_000004_create_staff_table;
mod m20260605_000005_create_business_settings_table;
mod m20260606_000006_create_appointment_table;
mod m20260606_000007_create_appointment_service_table;
mod m20260606_000008_create_staff_day_lock_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260605_000001_create_business_table::Migration),
            Box::new(m20260605_000002_create_customer_table::Migration),
            Box::new(m20260605_000003_create_service_table::Migration),
            Box::new(m20260605_000004_create_staff_table::Migration),
            Box::new(m20260605_000005_create_business_settings_table::Migration),
            Box::new(m20260606_000006_create_appointment_table::Migration),
            Box::new(m20260606_000007_create_appointment_service_table::Migration),
            Box::new(m20260606_000008_create_staff_day_lock_table::Migration),
        ]
    }
}
