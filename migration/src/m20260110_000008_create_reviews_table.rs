use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000007_create_appointments_table::Appointment;

static FK_REVIEWS_APPOINTMENT_ID: &str = "fk_reviews_appointment_id";
static IDX_REVIEWS_APPOINTMENT_ID: &str = "idx_reviews_appointment_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::AppointmentId))
                    .col(integer(Review::Rating))
                    .col(text(Review::Comment))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REVIEWS_APPOINTMENT_ID)
                            .from(Review::Table, Review::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique: at most one review per appointment.
        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEWS_APPOINTMENT_ID)
                    .table(Review::Table)
                    .col(Review::AppointmentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEWS_APPOINTMENT_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    #[sea_orm(iden = "Reviews")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "AppointmentId")]
    AppointmentId,
    #[sea_orm(iden = "Rating")]
    Rating,
    #[sea_orm(iden = "Comment")]
    Comment,
}
