//! Seed step: doctor and patient profiles extending the baseline users.

use entity::{
    doctor,
    patient::{self, BloodType},
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::{
    error::Error,
    seed::{users, SeedIds, StepOutcome},
};

/// Step name used in logs and errors.
pub const NAME: &str = "doctors_patients";

/// Inserts both doctor profiles and both patient profiles unless any doctor
/// already exists. Profile rows reuse the ids of the users they extend, so
/// the users step must have resolved those first.
pub async fn seed(db: &DatabaseConnection, ids: &mut SeedIds) -> Result<StepOutcome, Error> {
    let outcome = if entity::prelude::Doctor::find().count(db).await? > 0 {
        StepOutcome::Skipped
    } else {
        let doctor_ids = resolve_users(ids, &users::DOCTOR_EMAILS)?;
        let patient_ids = resolve_users(ids, &users::PATIENT_EMAILS)?;

        let doctors = vec![
            build_doctor(doctor_ids[0], 10, 200000),
            build_doctor(doctor_ids[1], 8, 180000),
        ];
        let patients = vec![
            build_patient(patient_ids[0], "333-444-5555"),
            build_patient(patient_ids[1], "333-444-5555"),
        ];
        let inserted = (doctors.len() + patients.len()) as u64;

        entity::prelude::Doctor::insert_many(doctors)
            .exec(db)
            .await
            .map_err(|source| Error::SeedConstraintViolation { step: NAME, source })?;
        entity::prelude::Patient::insert_many(patients)
            .exec(db)
            .await
            .map_err(|source| Error::SeedConstraintViolation { step: NAME, source })?;

        StepOutcome::Seeded(inserted)
    };

    // Profile ids equal the ids of the users they extend, so they resolve
    // from the email map on the skip path too. Leaving them unresolved is
    // not an error here; a later step that needs them will report it.
    ids.doctors = users::DOCTOR_EMAILS
        .iter()
        .filter_map(|email| ids.users.get(*email).copied())
        .collect();
    ids.patients = users::PATIENT_EMAILS
        .iter()
        .filter_map(|email| ids.users.get(*email).copied())
        .collect();

    Ok(outcome)
}

fn resolve_users(ids: &SeedIds, emails: &[&str]) -> Result<Vec<i32>, Error> {
    emails
        .iter()
        .map(|email| {
            ids.users
                .get(*email)
                .copied()
                .ok_or(Error::SeedDependencyMissing {
                    step: NAME,
                    entity: "user",
                })
        })
        .collect()
}

fn build_doctor(user_id: i32, experience_years: i32, consultation_fee: i64) -> doctor::ActiveModel {
    doctor::ActiveModel {
        user_id: Set(user_id),
        experience_years: Set(experience_years),
        consultation_fee: Set(consultation_fee),
        review_count: Set(0),
    }
}

fn build_patient(user_id: i32, relative_phone_number: &str) -> patient::ActiveModel {
    patient::ActiveModel {
        user_id: Set(user_id),
        blood_type: Set(BloodType::APlus),
        disease_history: Set("Không có tiền sử bệnh nghiêm trọng".to_string()),
        relative_phone_number: Set(relative_phone_number.to_string()),
    }
}
