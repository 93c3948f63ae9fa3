use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_users_table::User;

static FK_PATIENTS_USER_ID: &str = "fk_patients_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patient::Table)
                    .if_not_exists()
                    .col(integer(Patient::UserId).primary_key())
                    .col(integer(Patient::BloodType))
                    .col(text(Patient::DiseaseHistory))
                    .col(string(Patient::RelativePhoneNumber))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PATIENTS_USER_ID)
                            .from(Patient::Table, Patient::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Patient {
    #[sea_orm(iden = "Patients")]
    Table,
    #[sea_orm(iden = "UserId")]
    UserId,
    #[sea_orm(iden = "BloodType")]
    BloodType,
    #[sea_orm(iden = "DiseaseHistory")]
    DiseaseHistory,
    #[sea_orm(iden = "RelativePhoneNumber")]
    RelativePhoneNumber,
}
