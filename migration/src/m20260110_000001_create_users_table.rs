use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string(User::Password))
                    .col(integer(User::Role))
                    .col(string_null(User::FullName))
                    .col(integer_null(User::Gender))
                    .col(string_null(User::PhoneNumber))
                    .col(date_null(User::DateOfBirth))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "Users")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "Email")]
    Email,
    #[sea_orm(iden = "Password")]
    Password,
    #[sea_orm(iden = "Role")]
    Role,
    #[sea_orm(iden = "FullName")]
    FullName,
    #[sea_orm(iden = "Gender")]
    Gender,
    #[sea_orm(iden = "PhoneNumber")]
    PhoneNumber,
    #[sea_orm(iden = "DateOfBirth")]
    DateOfBirth,
}
