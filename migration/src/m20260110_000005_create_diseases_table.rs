use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Disease::Table)
                    .if_not_exists()
                    .col(pk_auto(Disease::Id))
                    .col(string_uniq(Disease::Code))
                    .col(string(Disease::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Disease::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Disease {
    #[sea_orm(iden = "Diseases")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "Code")]
    Code,
    #[sea_orm(iden = "Name")]
    Name,
}
