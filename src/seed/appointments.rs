//! Seed step: the baseline appointment.

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use entity::appointment;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    error::Error,
    seed::{diseases, SeedIds, StepOutcome},
};

/// Step name used in logs and errors.
pub const NAME: &str = "appointments";

/// Consultation fee of the seeded appointment.
pub const FEE: i64 = 200000;
const DIAGNOSIS: &str = "Chẩn đoán ban đầu";

/// One-hour booking window of the seeded appointment.
pub fn booking_window() -> (NaiveDateTime, NaiveDateTime) {
    let start = NaiveDate::from_ymd_opt(2026, 2, 5)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("static seed timestamp");

    (start, start + Duration::hours(1))
}

/// Books the first doctor's first patient for the hypertension diagnosis,
/// unless any appointment already exists. Requires doctor, patient, and
/// disease ids collected by the earlier steps.
pub async fn seed(db: &DatabaseConnection, ids: &mut SeedIds) -> Result<StepOutcome, Error> {
    let (start, end) = booking_window();

    let outcome = if entity::prelude::Appointment::find().count(db).await? > 0 {
        StepOutcome::Skipped
    } else {
        let doctor_id = first(&ids.doctors, "doctor")?;
        let patient_id = first(&ids.patients, "patient")?;
        let disease_id =
            ids.diseases
                .get(diseases::HYPERTENSION_CODE)
                .copied()
                .ok_or(Error::SeedDependencyMissing {
                    step: NAME,
                    entity: "disease",
                })?;

        let row = appointment::ActiveModel::try_new(
            patient_id,
            doctor_id,
            Some(disease_id),
            start,
            end,
            FEE,
            DIAGNOSIS,
            Utc::now().naive_utc(),
        )?;

        entity::prelude::Appointment::insert(row)
            .exec(db)
            .await
            .map_err(|source| Error::SeedConstraintViolation { step: NAME, source })?;

        StepOutcome::Seeded(1)
    };

    // Resolve the appointment id for the review step by its defining
    // attributes rather than by insertion order.
    if let (Some(&doctor_id), Some(&patient_id)) = (ids.doctors.first(), ids.patients.first()) {
        let found = entity::prelude::Appointment::find()
            .filter(appointment::Column::DoctorId.eq(doctor_id))
            .filter(appointment::Column::PatientId.eq(patient_id))
            .filter(appointment::Column::AppointmentTime.eq(start))
            .one(db)
            .await?;

        ids.appointment = found.map(|appointment| appointment.id);
    }

    Ok(outcome)
}

fn first(profile_ids: &[i32], entity: &'static str) -> Result<i32, Error> {
    profile_ids
        .first()
        .copied()
        .ok_or(Error::SeedDependencyMissing { step: NAME, entity })
}
