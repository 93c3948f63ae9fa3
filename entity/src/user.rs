use sea_orm::entity::prelude::*;

/// Account role, fixed at creation time. Doctor and patient profiles extend
/// a user holding the matching role.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum UserRole {
    #[sea_orm(num_value = 0)]
    Admin,
    #[sea_orm(num_value = 1)]
    Doctor,
    #[sea_orm(num_value = 2)]
    Patient,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Gender {
    #[sea_orm(num_value = 0)]
    Male,
    #[sea_orm(num_value = 1)]
    Female,
    #[sea_orm(num_value = 2)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Users")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "Email", unique)]
    pub email: String,
    #[sea_orm(column_name = "Password")]
    pub password: String,
    #[sea_orm(column_name = "Role")]
    pub role: UserRole,
    #[sea_orm(column_name = "FullName")]
    pub full_name: Option<String>,
    #[sea_orm(column_name = "Gender")]
    pub gender: Option<Gender>,
    #[sea_orm(column_name = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[sea_orm(column_name = "DateOfBirth")]
    pub date_of_birth: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::doctor::Entity")]
    Doctor,
    #[sea_orm(has_one = "super::patient::Entity")]
    Patient,
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
