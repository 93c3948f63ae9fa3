use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Doctor::Table)
                    .rename_column(Doctor::AppointmentCount, Doctor::ReviewCount)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Doctor::Table)
                    .rename_column(Doctor::ReviewCount, Doctor::AppointmentCount)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Doctor {
    #[sea_orm(iden = "Doctors")]
    Table,
    #[sea_orm(iden = "AppointmentCount")]
    AppointmentCount,
    #[sea_orm(iden = "ReviewCount")]
    ReviewCount,
}
