use sea_orm::{entity::prelude::*, Set};

use crate::error::ValidationError;

/// Patient review of a completed appointment, one per appointment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Reviews")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "AppointmentId")]
    pub appointment_id: i32,
    #[sea_orm(column_name = "Rating")]
    pub rating: i32,
    #[sea_orm(column_name = "Comment")]
    pub comment: String,
    #[sea_orm(column_name = "CreatedAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::appointment::Entity",
        from = "Column::AppointmentId",
        to = "super::appointment::Column::Id"
    )]
    Appointment,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Builds an insertable review; ratings live on a 1 to 5 scale.
    pub fn try_new(
        appointment_id: i32,
        rating: i32,
        comment: impl Into<String>,
        created_at: DateTime,
    ) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange(rating));
        }

        Ok(Self {
            appointment_id: Set(appointment_id),
            rating: Set(rating),
            comment: Set(comment.into()),
            created_at: Set(created_at),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime {
        Date::from_ymd_opt(2026, 2, 5)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    /// Expect success for an in-range rating
    #[test]
    fn builds_valid_review() {
        assert!(ActiveModel::try_new(1, 5, "great", now()).is_ok());
    }

    /// Expect rejection for out-of-range ratings on both ends
    #[test]
    fn rejects_out_of_range_rating() {
        assert_eq!(
            ActiveModel::try_new(1, 0, "bad", now()).unwrap_err(),
            ValidationError::RatingOutOfRange(0)
        );
        assert_eq!(
            ActiveModel::try_new(1, 6, "too good", now()).unwrap_err(),
            ValidationError::RatingOutOfRange(6)
        );
    }
}
