use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260110_000003_create_doctors_table::Doctor, m20260110_000004_create_patients_table::Patient,
    m20260110_000005_create_diseases_table::Disease,
    m20260110_000007_create_appointments_table::Appointment,
};

static FK_APPOINTMENTS_DOCTOR_ID: &str = "fk_appointments_doctor_id";
static FK_APPOINTMENTS_PATIENT_ID: &str = "fk_appointments_patient_id";
static FK_APPOINTMENTS_DISEASE_ID: &str = "fk_appointments_disease_id";

static IDX_APPOINTMENTS_DOCTOR_ID: &str = "idx_appointments_doctor_id";
static IDX_APPOINTMENTS_PATIENT_ID: &str = "idx_appointments_patient_id";
static IDX_APPOINTMENTS_DISEASE_ID: &str = "idx_appointments_disease_id";

static REBUILD_TABLE: &str = "Appointments_rebuild";

/// Relaxes `Appointments.DiseaseId` to nullable: at booking time a doctor may
/// not have diagnosed the disease yet.
///
/// SQLite cannot change a column's nullability in place, so both directions
/// perform the standard table rebuild: create the new shape under a temporary
/// name, copy the rows, drop the old table, rename, recreate the indexes.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        rebuild_with_disease_column(
            manager,
            integer_null(Appointment::DiseaseId),
            r#"INSERT INTO "Appointments_rebuild"
               ("Id", "PatientId", "DoctorId", "DiseaseId", "AppointmentTime",
                "Fee", "Diagnosis", "AppointmentEndTime", "CreatedAt")
               SELECT "Id", "PatientId", "DoctorId", "DiseaseId",
                      "AppointmentTime", "Fee", "Diagnosis",
                      "AppointmentEndTime", "CreatedAt"
               FROM "Appointments""#,
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Rows booked without a diagnosis fall back to 0, mirroring the
        // pre-revision default.
        rebuild_with_disease_column(
            manager,
            integer(Appointment::DiseaseId).default(0).to_owned(),
            r#"INSERT INTO "Appointments_rebuild"
               ("Id", "PatientId", "DoctorId", "DiseaseId", "AppointmentTime",
                "Fee", "Diagnosis", "AppointmentEndTime", "CreatedAt")
               SELECT "Id", "PatientId", "DoctorId", IFNULL("DiseaseId", 0),
                      "AppointmentTime", "Fee", "Diagnosis",
                      "AppointmentEndTime", "CreatedAt"
               FROM "Appointments""#,
        )
        .await
    }
}

async fn rebuild_with_disease_column(
    manager: &SchemaManager<'_>,
    disease_column: ColumnDef,
    copy_statement: &str,
) -> Result<(), DbErr> {
    // Reviews references Appointments with ON DELETE CASCADE; with
    // enforcement on, dropping the old table runs an implicit DELETE that
    // cascades into existing review rows. Enforcement stays off for the
    // whole rebuild, per SQLite's documented rebuild procedure.
    manager
        .get_connection()
        .execute_unprepared("PRAGMA foreign_keys = OFF")
        .await?;

    let rebuilt = rebuild(manager, disease_column, copy_statement).await;

    manager
        .get_connection()
        .execute_unprepared("PRAGMA foreign_keys = ON")
        .await?;

    rebuilt
}

async fn rebuild(
    manager: &SchemaManager<'_>,
    disease_column: ColumnDef,
    copy_statement: &str,
) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Alias::new(REBUILD_TABLE))
                .col(pk_auto(Appointment::Id))
                .col(integer(Appointment::PatientId))
                .col(integer(Appointment::DoctorId))
                .col(disease_column)
                .col(timestamp(Appointment::AppointmentTime))
                .col(big_integer(Appointment::Fee))
                .col(text(Appointment::Diagnosis))
                .col(timestamp(AppointmentAudit::AppointmentEndTime))
                .col(timestamp(AppointmentAudit::CreatedAt))
                .foreign_key(
                    ForeignKey::create()
                        .name(FK_APPOINTMENTS_PATIENT_ID)
                        .from(Alias::new(REBUILD_TABLE), Appointment::PatientId)
                        .to(Patient::Table, Patient::UserId)
                        .on_delete(ForeignKeyAction::Restrict),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name(FK_APPOINTMENTS_DOCTOR_ID)
                        .from(Alias::new(REBUILD_TABLE), Appointment::DoctorId)
                        .to(Doctor::Table, Doctor::UserId)
                        .on_delete(ForeignKeyAction::Restrict),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name(FK_APPOINTMENTS_DISEASE_ID)
                        .from(Alias::new(REBUILD_TABLE), Appointment::DiseaseId)
                        .to(Disease::Table, Disease::Id)
                        .on_delete(ForeignKeyAction::Restrict),
                )
                .to_owned(),
        )
        .await?;

    manager.get_connection().execute_unprepared(copy_statement).await?;

    manager
        .drop_table(Table::drop().table(Appointment::Table).to_owned())
        .await?;

    manager
        .rename_table(
            Table::rename()
                .table(Alias::new(REBUILD_TABLE), Appointment::Table)
                .to_owned(),
        )
        .await?;

    // Indexes were dropped with the old table.
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
        .await
}

#[derive(DeriveIden)]
enum AppointmentAudit {
    #[sea_orm(iden = "AppointmentEndTime")]
    AppointmentEndTime,
    #[sea_orm(iden = "CreatedAt")]
    CreatedAt,
}
