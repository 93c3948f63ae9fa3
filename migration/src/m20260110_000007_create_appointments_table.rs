use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260110_000003_create_doctors_table::Doctor, m20260110_000004_create_patients_table::Patient,
    m20260110_000005_create_diseases_table::Disease,
};

static FK_APPOINTMENTS_DOCTOR_ID: &str = "fk_appointments_doctor_id";
static FK_APPOINTMENTS_PATIENT_ID: &str = "fk_appointments_patient_id";
static FK_APPOINTMENTS_DISEASE_ID: &str = "fk_appointments_disease_id";

static IDX_APPOINTMENTS_DOCTOR_ID: &str = "idx_appointments_doctor_id";
static IDX_APPOINTMENTS_PATIENT_ID: &str = "idx_appointments_patient_id";
static IDX_APPOINTMENTS_DISEASE_ID: &str = "idx_appointments_disease_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Initial shape: the disease link is still mandatory and there is no
        // end time or creation timestamp yet. Referenced rows are protected
        // with RESTRICT so a delete can never orphan a booking.
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::PatientId))
                    .col(integer(Appointment::DoctorId))
                    .col(integer(Appointment::DiseaseId))
                    .col(timestamp(Appointment::AppointmentTime))
                    .col(big_integer(Appointment::Fee))
                    .col(text(Appointment::Diagnosis))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APPOINTMENTS_PATIENT_ID)
                            .from(Appointment::Table, Appointment::PatientId)
                            .to(Patient::Table, Patient::UserId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APPOINTMENTS_DOCTOR_ID)
                            .from(Appointment::Table, Appointment::DoctorId)
                            .to(Doctor::Table, Doctor::UserId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APPOINTMENTS_DISEASE_ID)
                            .from(Appointment::Table, Appointment::DiseaseId)
                            .to(Disease::Table, Disease::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPOINTMENTS_DOCTOR_ID)
                    .table(Appointment::Table)
                    .col(Appointment::DoctorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPOINTMENTS_PATIENT_ID)
                    .table(Appointment::Table)
                    .col(Appointment::PatientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPOINTMENTS_DISEASE_ID)
                    .table(Appointment::Table)
                    .col(Appointment::DiseaseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPOINTMENTS_DISEASE_ID)
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPOINTMENTS_PATIENT_ID)
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPOINTMENTS_DOCTOR_ID)
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    #[sea_orm(iden = "Appointments")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "PatientId")]
    PatientId,
    #[sea_orm(iden = "DoctorId")]
    DoctorId,
    #[sea_orm(iden = "DiseaseId")]
    DiseaseId,
    #[sea_orm(iden = "AppointmentTime")]
    AppointmentTime,
    #[sea_orm(iden = "Fee")]
    Fee,
    #[sea_orm(iden = "Diagnosis")]
    Diagnosis,
}
