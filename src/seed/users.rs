//! Seed step: baseline user accounts for every role.

use chrono::NaiveDate;
use entity::user::{self, Gender, UserRole};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};

use crate::{
    error::Error,
    seed::{SeedIds, StepOutcome},
};

/// Step name used in logs and errors.
pub const NAME: &str = "users";

/// Placeholder credential shared by all baseline accounts.
const DEFAULT_PASSWORD: &str = "ChangeMe!123";

/// Email of the seeded administrator account.
pub const ADMIN_EMAIL: &str = "admin@admin.com";
/// Emails of the seeded doctor accounts, in seed order.
pub const DOCTOR_EMAILS: [&str; 2] = ["doctor1@doctor.com", "doctor2@doctor.com"];
/// Emails of the seeded patient accounts, in seed order.
pub const PATIENT_EMAILS: [&str; 2] = ["nguyen@patient.com", "quan@patient.com"];

/// Inserts the five baseline users unless any user already exists, then
/// resolves the seed emails to ids for the steps that extend them.
pub async fn seed(db: &DatabaseConnection, ids: &mut SeedIds) -> Result<StepOutcome, Error> {
    let outcome = if entity::prelude::User::find().count(db).await? > 0 {
        StepOutcome::Skipped
    } else {
        let rows = vec![
            build_user(
                ADMIN_EMAIL,
                UserRole::Admin,
                "Admin User",
                Gender::Other,
                "000-111-2222",
                NaiveDate::from_ymd_opt(1990, 6, 15),
            ),
            build_user(
                DOCTOR_EMAILS[0],
                UserRole::Doctor,
                "Bac si 1",
                Gender::Male,
                "012-345-6789",
                NaiveDate::from_ymd_opt(1980, 1, 1),
            ),
            build_user(
                PATIENT_EMAILS[0],
                UserRole::Patient,
                "Nguyen Huu Dang Nguyen",
                Gender::Male,
                "333-444-5555",
                NaiveDate::from_ymd_opt(2005, 9, 10),
            ),
            build_user(
                DOCTOR_EMAILS[1],
                UserRole::Doctor,
                "Bac si 2",
                Gender::Female,
                "987-654-3210",
                NaiveDate::from_ymd_opt(1985, 5, 15),
            ),
            build_user(
                PATIENT_EMAILS[1],
                UserRole::Patient,
                "Tran Quan",
                Gender::Male,
                "444-555-6666",
                NaiveDate::from_ymd_opt(2003, 12, 20),
            ),
        ];
        let inserted = rows.len() as u64;

        entity::prelude::User::insert_many(rows)
            .exec(db)
            .await
            .map_err(|source| Error::SeedConstraintViolation { step: NAME, source })?;

        StepOutcome::Seeded(inserted)
    };

    collect_ids(db, ids).await?;

    Ok(outcome)
}

fn build_user(
    email: &str,
    role: UserRole,
    full_name: &str,
    gender: Gender,
    phone_number: &str,
    date_of_birth: Option<NaiveDate>,
) -> user::ActiveModel {
    user::ActiveModel {
        email: Set(email.to_string()),
        password: Set(DEFAULT_PASSWORD.to_string()),
        role: Set(role),
        full_name: Set(Some(full_name.to_string())),
        gender: Set(Some(gender)),
        phone_number: Set(Some(phone_number.to_string())),
        date_of_birth: Set(date_of_birth),
        ..Default::default()
    }
}

async fn collect_ids(db: &DatabaseConnection, ids: &mut SeedIds) -> Result<(), Error> {
    let seed_emails = [
        ADMIN_EMAIL,
        DOCTOR_EMAILS[0],
        DOCTOR_EMAILS[1],
        PATIENT_EMAILS[0],
        PATIENT_EMAILS[1],
    ];

    let found = entity::prelude::User::find()
        .filter(user::Column::Email.is_in(seed_emails))
        .all(db)
        .await?;

    for user in found {
        ids.users.insert(user.email, user.id);
    }

    Ok(())
}
