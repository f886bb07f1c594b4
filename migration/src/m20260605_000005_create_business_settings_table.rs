use sea_orm_migration::{prelude::*, schema::*};

use super::m20260605_000001_create_business_table::Business;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(BusinessSettings::Id))
                    .col(integer_uniq(BusinessSettings::BusinessId))
                    .col(integer(BusinessSettings::SlotLengthMinutes).default(30))
                    .col(integer(BusinessSettings::BufferTimeMinutes).default(15))
                    .col(integer(BusinessSettings::CancellationHours).default(24))
                    .col(time(BusinessSettings::WorkingHoursStart))
                    .col(time(BusinessSettings::WorkingHoursEnd))
                    .col(string(BusinessSettings::TimeZone))
                    .col(
                        timestamp(BusinessSettings::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(BusinessSettings::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_settings_business_id")
                            .from(BusinessSettings::Table, BusinessSettings::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusinessSettings {
    Table,
    Id,
    BusinessId,
    SlotLengthMinutes,
    BufferTimeMinutes,
    CancellationHours,
    WorkingHoursStart,
    WorkingHoursEnd,
    TimeZone,
    CreatedAt,
    UpdatedAt,
}
