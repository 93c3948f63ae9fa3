//! Minimal row fixtures for tests that poke at the schema directly rather
//! than going through the seeding pipeline.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use entity::{
    appointment, doctor,
    doctor_schedule::{self, DayOfWeek},
    patient::{self, BloodType},
    user::{self, UserRole},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::error::TestError;

pub async fn insert_user(
    db: &DatabaseConnection,
    email: &str,
    role: UserRole,
) -> Result<user::Model, TestError> {
    let row = user::ActiveModel {
        email: Set(email.to_string()),
        password: Set("test_password".to_string()),
        role: Set(role),
        full_name: Set(None),
        gender: Set(None),
        phone_number: Set(None),
        date_of_birth: Set(None),
        ..Default::default()
    };

    Ok(row.insert(db).await?)
}

pub async fn insert_doctor(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<doctor::Model, TestError> {
    let row = doctor::ActiveModel {
        user_id: Set(user_id),
        experience_years: Set(5),
        consultation_fee: Set(150000),
        review_count: Set(0),
    };

    Ok(row.insert(db).await?)
}

pub async fn insert_patient(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<patient::Model, TestError> {
    let row = patient::ActiveModel {
        user_id: Set(user_id),
        blood_type: Set(BloodType::OPlus),
        disease_history: Set(String::new()),
        relative_phone_number: Set("111-222-3333".to_string()),
    };

    Ok(row.insert(db).await?)
}

pub async fn insert_schedule(
    db: &DatabaseConnection,
    doctor_id: i32,
) -> Result<doctor_schedule::Model, TestError> {
    let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let end = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

    let row = doctor_schedule::ActiveModel::try_new(doctor_id, DayOfWeek::Friday, start, end, 30)?;

    Ok(row.insert(db).await?)
}

pub async fn insert_appointment(
    db: &DatabaseConnection,
    doctor_id: i32,
    patient_id: i32,
    disease_id: Option<i32>,
) -> Result<appointment::Model, TestError> {
    let start = appointment_start();

    let row = appointment::ActiveModel::try_new(
        patient_id,
        doctor_id,
        disease_id,
        start,
        start + chrono::Duration::minutes(30),
        150000,
        "checkup",
        Utc::now().naive_utc(),
    )?;

    Ok(row.insert(db).await?)
}

fn appointment_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}
