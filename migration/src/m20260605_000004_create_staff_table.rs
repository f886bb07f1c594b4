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
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(pk_auto(Staff::Id))
                    .col(integer(Staff::BusinessId))
                    .col(string(Staff::FullName))
                    .col(string_null(Staff::Email))
                    .col(string_null(Staff::Phone))
                    .col(boolean(Staff::IsActive).default(true))
                    .col(
                        timestamp(Staff::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Staff::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_business_id")
                            .from(Staff::Table, Staff::BusinessId)
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
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Staff {
    Table,
    Id,
    BusinessId,
    FullName,
    Email,
    Phone,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
