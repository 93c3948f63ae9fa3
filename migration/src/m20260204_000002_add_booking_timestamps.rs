use sea_orm_migration::{prelude::*, schema::*};

/// Backfill value for rows that predate these columns.
static EPOCH: &str = "1970-01-01 00:00:00";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One column per statement: SQLite only accepts a single ADD COLUMN
        // per ALTER TABLE.
        manager
            .alter_table(
                Table::alter()
                    .table(Review::Table)
                    .add_column(timestamp(Review::CreatedAt).default(EPOCH))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Appointment::Table)
                    .add_column(timestamp(Appointment::AppointmentEndTime).default(EPOCH))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Appointment::Table)
                    .add_column(timestamp(Appointment::CreatedAt).default(EPOCH))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Appointment::Table)
                    .drop_column(Appointment::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Appointment::Table)
                    .drop_column(Appointment::AppointmentEndTime)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Review::Table)
                    .drop_column(Review::CreatedAt)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Appointment {
    #[sea_orm(iden = "Appointments")]
    Table,
    #[sea_orm(iden = "AppointmentEndTime")]
    AppointmentEndTime,
    #[sea_orm(iden = "CreatedAt")]
    CreatedAt,
}

#[derive(DeriveIden)]
enum Review {
    #[sea_orm(iden = "Reviews")]
    Table,
    #[sea_orm(iden = "CreatedAt")]
    CreatedAt,
}
