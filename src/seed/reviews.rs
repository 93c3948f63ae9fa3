//! Seed step: a review of the seeded appointment.

use chrono::Utc;
use entity::review;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::{
    error::Error,
    seed::{SeedIds, StepOutcome},
};

/// Step name used in logs and errors.
pub const NAME: &str = "reviews";

/// Rating of the seeded review.
pub const RATING: i32 = 5;

/// Inserts one five-star review on the seeded appointment unless any review
/// already exists.
pub async fn seed(db: &DatabaseConnection, ids: &SeedIds) -> Result<StepOutcome, Error> {
    if entity::prelude::Review::find().count(db).await? > 0 {
        return Ok(StepOutcome::Skipped);
    }

    let appointment_id = ids.appointment.ok_or(Error::SeedDependencyMissing {
        step: NAME,
        entity: "appointment",
    })?;

    let row = review::ActiveModel::try_new(
        appointment_id,
        RATING,
        "Bác sĩ rất tận tâm và chuyên nghiệp.",
        Utc::now().naive_utc(),
    )?;

    entity::prelude::Review::insert(row)
        .exec(db)
        .await
        .map_err(|source| Error::SeedConstraintViolation { step: NAME, source })?;

    Ok(StepOutcome::Seeded(1))
}
