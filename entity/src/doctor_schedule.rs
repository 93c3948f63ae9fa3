use sea_orm::{entity::prelude::*, Set};

use crate::error::ValidationError;

/// Day-of-week stored with Sunday as 0, matching the values already persisted
/// by the schema.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum DayOfWeek {
    #[sea_orm(num_value = 0)]
    Sunday,
    #[sea_orm(num_value = 1)]
    Monday,
    #[sea_orm(num_value = 2)]
    Tuesday,
    #[sea_orm(num_value = 3)]
    Wednesday,
    #[sea_orm(num_value = 4)]
    Thursday,
    #[sea_orm(num_value = 5)]
    Friday,
    #[sea_orm(num_value = 6)]
    Saturday,
}

/// Weekly consultation window of a doctor, sliced into bookable slots.
/// Deleted together with its doctor.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "DoctorSchedules")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "DoctorId")]
    pub doctor_id: i32,
    #[sea_orm(column_name = "DayOfWeek")]
    pub day_of_week: DayOfWeek,
    #[sea_orm(column_name = "StartTime")]
    pub start_time: Time,
    #[sea_orm(column_name = "EndTime")]
    pub end_time: Time,
    #[sea_orm(column_name = "SlotDurationInMinutes")]
    pub slot_duration_in_minutes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doctor::Entity",
        from = "Column::DoctorId",
        to = "super::doctor::Column::UserId"
    )]
    Doctor,
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Builds an insertable schedule. The window must be non-empty and the
    /// slot duration must be positive and evenly divide it.
    pub fn try_new(
        doctor_id: i32,
        day_of_week: DayOfWeek,
        start_time: Time,
        end_time: Time,
        slot_duration_in_minutes: i32,
    ) -> Result<Self, ValidationError> {
        if start_time >= end_time {
            return Err(ValidationError::ScheduleWindow {
                start: start_time,
                end: end_time,
            });
        }
        if slot_duration_in_minutes <= 0 {
            return Err(ValidationError::SlotDuration(slot_duration_in_minutes));
        }

        let window_minutes = end_time.signed_duration_since(start_time).num_minutes();
        if window_minutes % i64::from(slot_duration_in_minutes) != 0 {
            return Err(ValidationError::SlotWindowMismatch {
                minutes: slot_duration_in_minutes,
                window_minutes,
            });
        }

        Ok(Self {
            doctor_id: Set(doctor_id),
            day_of_week: Set(day_of_week),
            start_time: Set(start_time),
            end_time: Set(end_time),
            slot_duration_in_minutes: Set(slot_duration_in_minutes),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> Time {
        Time::from_hms_opt(hour, minute, 0).unwrap()
    }

    /// Expect success for a 9 to 5 window with 30 minute slots
    #[test]
    fn builds_valid_schedule() {
        let result = ActiveModel::try_new(1, DayOfWeek::Monday, hm(9, 0), hm(17, 0), 30);

        assert!(result.is_ok());
    }

    /// Expect rejection when the window start is not before its end
    #[test]
    fn rejects_empty_window() {
        let result = ActiveModel::try_new(1, DayOfWeek::Monday, hm(17, 0), hm(9, 0), 30);

        assert_eq!(
            result.unwrap_err(),
            ValidationError::ScheduleWindow {
                start: hm(17, 0),
                end: hm(9, 0),
            }
        );
    }

    /// Expect rejection for a non-positive slot duration
    #[test]
    fn rejects_zero_slot() {
        let result = ActiveModel::try_new(1, DayOfWeek::Monday, hm(9, 0), hm(17, 0), 0);

        assert_eq!(result.unwrap_err(), ValidationError::SlotDuration(0));
    }

    /// Expect rejection when slots do not evenly divide the window
    #[test]
    fn rejects_uneven_slots() {
        let result = ActiveModel::try_new(1, DayOfWeek::Monday, hm(9, 0), hm(17, 0), 45);

        assert_eq!(
            result.unwrap_err(),
            ValidationError::SlotWindowMismatch {
                minutes: 45,
                window_minutes: 480,
            }
        );
    }
}
