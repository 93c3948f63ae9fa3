use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Medicine::Table)
                    .if_not_exists()
                    .col(pk_auto(Medicine::Id))
                    .col(string(Medicine::Name))
                    .col(text(Medicine::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Medicine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Medicine {
    #[sea_orm(iden = "Medicines")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "Description")]
    Description,
}
