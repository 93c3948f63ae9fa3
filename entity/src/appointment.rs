use sea_orm::{entity::prelude::*, Set};

use crate::error::ValidationError;

/// Booking linking a patient and a doctor, with an optional diagnosed
/// disease. The disease link is nullable: at booking time the doctor may not
/// have made a diagnosis yet.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Appointments")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "PatientId")]
    pub patient_id: i32,
    #[sea_orm(column_name = "DoctorId")]
    pub doctor_id: i32,
    #[sea_orm(column_name = "DiseaseId")]
    pub disease_id: Option<i32>,
    #[sea_orm(column_name = "AppointmentTime")]
    pub appointment_time: DateTime,
    #[sea_orm(column_name = "AppointmentEndTime")]
    pub appointment_end_time: DateTime,
    #[sea_orm(column_name = "Fee")]
    pub fee: i64,
    #[sea_orm(column_name = "Diagnosis")]
    pub diagnosis: String,
    #[sea_orm(column_name = "CreatedAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doctor::Entity",
        from = "Column::DoctorId",
        to = "super::doctor::Column::UserId"
    )]
    Doctor,
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::PatientId",
        to = "super::patient::Column::UserId"
    )]
    Patient,
    #[sea_orm(
        belongs_to = "super::disease::Entity",
        from = "Column::DiseaseId",
        to = "super::disease::Column::Id"
    )]
    Disease,
    #[sea_orm(has_one = "super::review::Entity")]
    Review,
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

impl Related<super::disease::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Disease.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Builds an insertable appointment, rejecting rows whose end time is not
    /// after their start time or whose fee is negative.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        patient_id: i32,
        doctor_id: i32,
        disease_id: Option<i32>,
        appointment_time: DateTime,
        appointment_end_time: DateTime,
        fee: i64,
        diagnosis: impl Into<String>,
        created_at: DateTime,
    ) -> Result<Self, ValidationError> {
        if appointment_end_time <= appointment_time {
            return Err(ValidationError::AppointmentWindow {
                start: appointment_time,
                end: appointment_end_time,
            });
        }
        if fee < 0 {
            return Err(ValidationError::NegativeFee(fee));
        }

        Ok(Self {
            patient_id: Set(patient_id),
            doctor_id: Set(doctor_id),
            disease_id: Set(disease_id),
            appointment_time: Set(appointment_time),
            appointment_end_time: Set(appointment_end_time),
            fee: Set(fee),
            diagnosis: Set(diagnosis.into()),
            created_at: Set(created_at),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> DateTime {
        Date::from_ymd_opt(2026, 2, 5)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    /// Expect success for a well-formed one hour booking
    #[test]
    fn builds_valid_appointment() {
        let result = ActiveModel::try_new(1, 2, Some(3), at(9), at(10), 200000, "note", at(9));

        assert!(result.is_ok());
    }

    /// Expect rejection when the end time is not after the start time
    #[test]
    fn rejects_inverted_window() {
        let result = ActiveModel::try_new(1, 2, None, at(10), at(10), 200000, "note", at(9));

        assert_eq!(
            result.unwrap_err(),
            ValidationError::AppointmentWindow {
                start: at(10),
                end: at(10),
            }
        );
    }

    /// Expect rejection for a negative fee
    #[test]
    fn rejects_negative_fee() {
        let result = ActiveModel::try_new(1, 2, None, at(9), at(10), -1, "note", at(9));

        assert_eq!(result.unwrap_err(), ValidationError::NegativeFee(-1));
    }
}
