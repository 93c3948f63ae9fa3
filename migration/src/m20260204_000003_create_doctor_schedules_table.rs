use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000003_create_doctors_table::Doctor;

static FK_DOCTOR_SCHEDULES_DOCTOR_ID: &str = "fk_doctor_schedules_doctor_id";
static IDX_DOCTOR_SCHEDULES_DOCTOR_ID: &str = "idx_doctor_schedules_doctor_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Schedules live and die with their doctor, hence the cascade.
        manager
            .create_table(
                Table::create()
                    .table(DoctorSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(DoctorSchedule::Id))
                    .col(integer(DoctorSchedule::DoctorId))
                    .col(integer(DoctorSchedule::DayOfWeek))
                    .col(time(DoctorSchedule::StartTime))
                    .col(time(DoctorSchedule::EndTime))
                    .col(integer(DoctorSchedule::SlotDurationInMinutes))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DOCTOR_SCHEDULES_DOCTOR_ID)
                            .from(DoctorSchedule::Table, DoctorSchedule::DoctorId)
                            .to(Doctor::Table, Doctor::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DOCTOR_SCHEDULES_DOCTOR_ID)
                    .table(DoctorSchedule::Table)
                    .col(DoctorSchedule::DoctorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DOCTOR_SCHEDULES_DOCTOR_ID)
                    .table(DoctorSchedule::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DoctorSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DoctorSchedule {
    #[sea_orm(iden = "DoctorSchedules")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "DoctorId")]
    DoctorId,
    #[sea_orm(iden = "DayOfWeek")]
    DayOfWeek,
    #[sea_orm(iden = "StartTime")]
    StartTime,
    #[sea_orm(iden = "EndTime")]
    EndTime,
    #[sea_orm(iden = "SlotDurationInMinutes")]
    SlotDurationInMinutes,
}
