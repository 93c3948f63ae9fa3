use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum BloodType {
    #[sea_orm(num_value = 0)]
    APlus,
    #[sea_orm(num_value = 1)]
    AMinus,
    #[sea_orm(num_value = 2)]
    BPlus,
    #[sea_orm(num_value = 3)]
    BMinus,
    #[sea_orm(num_value = 4)]
    AbPlus,
    #[sea_orm(num_value = 5)]
    AbMinus,
    #[sea_orm(num_value = 6)]
    OPlus,
    #[sea_orm(num_value = 7)]
    OMinus,
}

/// Patient profile extending a [`super::user`] row with role `Patient`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Patients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "UserId")]
    pub user_id: i32,
    #[sea_orm(column_name = "BloodType")]
    pub blood_type: BloodType,
    #[sea_orm(column_name = "DiseaseHistory")]
    pub disease_history: String,
    #[sea_orm(column_name = "RelativePhoneNumber")]
    pub relative_phone_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointments,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
