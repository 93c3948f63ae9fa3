use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_users_table::User;

static FK_DOCTORS_USER_ID: &str = "fk_doctors_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add constraints after table creation, so the user
        // foreign key is declared inline.
        manager
            .create_table(
                Table::create()
                    .table(Doctor::Table)
                    .if_not_exists()
                    .col(integer(Doctor::UserId).primary_key())
                    .col(integer(Doctor::ExperienceYears))
                    .col(big_integer(Doctor::ConsultationFee))
                    .col(integer(Doctor::AppointmentCount).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DOCTORS_USER_ID)
                            .from(Doctor::Table, Doctor::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Doctor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Doctor {
    #[sea_orm(iden = "Doctors")]
    Table,
    #[sea_orm(iden = "UserId")]
    UserId,
    #[sea_orm(iden = "ExperienceYears")]
    ExperienceYears,
    #[sea_orm(iden = "ConsultationFee")]
    ConsultationFee,
    /// Renamed to `ReviewCount` by a later migration.
    #[sea_orm(iden = "AppointmentCount")]
    AppointmentCount,
}
