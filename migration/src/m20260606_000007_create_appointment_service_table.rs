use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260605_000003_create_service_table::Service,
    m20260606_000006_create_appointment_table::Appointment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No uniqueness on (appointment_id, service_id): repeat bookings of
        // the same service on one appointment are additive.
        manager
            .create_table(
                Table::create()
                    .table(AppointmentService::Table)
                    .if_not_exists()
                    .col(pk_auto(AppointmentService::Id))
                    .col(integer(AppointmentService::AppointmentId))
                    .col(integer(AppointmentService::ServiceId))
                    .col(decimal_len(AppointmentService::Price, 10, 2))
                    .col(
                        timestamp(AppointmentService::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_appointment_id")
                            .from(
                                AppointmentService::Table,
                                AppointmentService::AppointmentId,
                            )
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_service_id")
                            .from(AppointmentService::Table, AppointmentService::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_service_appointment")
                    .table(AppointmentService::Table)
                    .col(AppointmentService::AppointmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppointmentService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppointmentService {
    Table,
    Id,
    AppointmentId,
    ServiceId,
    Price,
    CreatedAt,
}
