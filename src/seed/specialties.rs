//! Seed step: medical specialties.

use entity::specialty;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::{error::Error, seed::StepOutcome};

/// Step name used in logs and errors.
pub const NAME: &str = "specialties";

/// Inserts the baseline specialty unless any specialty already exists.
pub async fn seed(db: &DatabaseConnection) -> Result<StepOutcome, Error> {
    if entity::prelude::Specialty::find().count(db).await? > 0 {
        return Ok(StepOutcome::Skipped);
    }

    let rows = vec![specialty::ActiveModel {
        name: Set("Tim mạch".to_string()),
        description: Set("Chuyên khoa tim mạch".to_string()),
        ..Default::default()
    }];
    let inserted = rows.len() as u64;

    entity::prelude::Specialty::insert_many(rows)
        .exec(db)
        .await
        .map_err(|source| Error::SeedConstraintViolation { step: NAME, source })?;

    Ok(StepOutcome::Seeded(inserted))
}
