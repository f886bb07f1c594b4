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
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_auto(Service::Id))
                    .col(integer(Service::BusinessId))
                    .col(string(Service::Name))
                    .col(text_null(Service::Description))
                    .col(integer(Service::DurationMinutes))
                    .col(decimal_len(Service::Price, 10, 2))
                    .col(boolean(Service::IsActive).default(true))
                    .col(
                        timestamp(Service::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Service::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_business_id")
                            .from(Service::Table, Service::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_business_active")
                    .table(Service::Table)
                    .col(Service::BusinessId)
                    .col(Service::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    Table,
    Id,
    BusinessId,
    Name,
    Description,
    DurationMinutes,
    Price,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
