use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260605_000001_create_business_table::Business,
    m20260605_000002_create_customer_table::Customer, m20260605_000004_create_staff_table::Staff,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::BusinessId))
                    .col(integer(Appointment::CustomerId))
                    .col(integer(Appointment::StaffId))
                    .col(timestamp(Appointment::StartTime))
                    .col(string_len(Appointment::Status, 16))
                    .col(text_null(Appointment::Notes))
                    .col(text_null(Appointment::AdminNote))
                    .col(text_null(Appointment::StaffNote))
                    .col(text_null(Appointment::CustomerNote))
                    .col(
                        timestamp(Appointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Appointment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_business_id")
                            .from(Appointment::Table, Appointment::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_customer_id")
                            .from(Appointment::Table, Appointment::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_staff_id")
                            .from(Appointment::Table, Appointment::StaffId)
                            .to(Staff::Table, Staff::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Range scans by staff calendar are the hot path for both the
        // double-booking guard and slot generation.
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_business_staff_start")
                    .table(Appointment::Table)
                    .col(Appointment::BusinessId)
                    .col(Appointment::StaffId)
                    .col(Appointment::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    BusinessId,
    CustomerId,
    StaffId,
    StartTime,
    Status,
    Notes,
    AdminNote,
    StaffNote,
    CustomerNote,
    CreatedAt,
    UpdatedAt,
}
