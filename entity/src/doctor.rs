use sea_orm::entity::prelude::*;

/// Doctor profile extending a [`super::user`] row with role `Doctor`.
/// Shares the user's primary key rather than carrying its own.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Doctors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "UserId")]
    pub user_id: i32,
    #[sea_orm(column_name = "ExperienceYears")]
    pub experience_years: i32,
    #[sea_orm(column_name = "ConsultationFee")]
    pub consultation_fee: i64,
    #[sea_orm(column_name = "ReviewCount")]
    pub review_count: i32,
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
    #[sea_orm(has_many = "super::doctor_schedule::Entity")]
    Schedules,
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

impl Related<super::doctor_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
