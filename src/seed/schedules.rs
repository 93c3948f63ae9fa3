//! Seed step: weekly consultation schedules for the first doctor.

use chrono::NaiveTime;
use entity::doctor_schedule::{self, DayOfWeek};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::{
    error::Error,
    seed::{SeedIds, StepOutcome},
};

/// Step name used in logs and errors.
pub const NAME: &str = "schedules";

/// Length of a bookable slot within each window.
pub const SLOT_MINUTES: i32 = 30;

/// Inserts two weekly windows for the first doctor unless any schedule
/// already exists.
pub async fn seed(db: &DatabaseConnection, ids: &SeedIds) -> Result<StepOutcome, Error> {
    if entity::prelude::DoctorSchedule::find().count(db).await? > 0 {
        return Ok(StepOutcome::Skipped);
    }

    let doctor_id = ids
        .doctors
        .first()
        .copied()
        .ok_or(Error::SeedDependencyMissing {
            step: NAME,
            entity: "doctor",
        })?;

    let rows = vec![
        build_schedule(doctor_id, DayOfWeek::Monday, (9, 0), (17, 0))?,
        build_schedule(doctor_id, DayOfWeek::Wednesday, (10, 0), (16, 0))?,
    ];
    let inserted = rows.len() as u64;

    entity::prelude::DoctorSchedule::insert_many(rows)
        .exec(db)
        .await
        .map_err(|source| Error::SeedConstraintViolation { step: NAME, source })?;

    Ok(StepOutcome::Seeded(inserted))
}

fn build_schedule(
    doctor_id: i32,
    day: DayOfWeek,
    start: (u32, u32),
    end: (u32, u32),
) -> Result<doctor_schedule::ActiveModel, Error> {
    let start = NaiveTime::from_hms_opt(start.0, start.1, 0).expect("static seed time");
    let end = NaiveTime::from_hms_opt(end.0, end.1, 0).expect("static seed time");

    Ok(doctor_schedule::ActiveModel::try_new(
        doctor_id,
        day,
        start,
        end,
        SLOT_MINUTES,
    )?)
}
