use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specialty::Table)
                    .if_not_exists()
                    .col(pk_auto(Specialty::Id))
                    .col(string(Specialty::Name))
                    .col(text(Specialty::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Specialty::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Specialty {
    #[sea_orm(iden = "Specialties")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "Description")]
    Description,
}
