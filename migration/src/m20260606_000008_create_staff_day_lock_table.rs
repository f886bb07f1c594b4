use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260605_000001_create_business_table::Business, m20260605_000004_create_staff_table::Staff,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Synthetic coordination rows. The composite primary key is the
        // conflict target for the idempotent upsert, and the row lock taken
        // on it serializes concurrent booking attempts touching the same
        // staff day. Rows are never deleted.
        manager
            .create_table(
                Table::create()
                    .table(StaffDayLock::Table)
                    .if_not_exists()
                    .col(integer(StaffDayLock::BusinessId))
                    .col(integer(StaffDayLock::StaffId))
                    .col(date(StaffDayLock::Day))
                    .primary_key(
                        Index::create()
                            .col(StaffDayLock::BusinessId)
                            .col(StaffDayLock::StaffId)
                            .col(StaffDayLock::Day),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_day_lock_business_id")
                            .from(StaffDayLock::Table, StaffDayLock::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_day_lock_staff_id")
                            .from(StaffDayLock::Table, StaffDayLock::StaffId)
                            .to(Staff::Table, Staff::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffDayLock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffDayLock {
    Table,
    BusinessId,
    StaffId,
    Day,
}
