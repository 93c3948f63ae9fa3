//! Seed step: medicine catalog.

use entity::medicine;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::{error::Error, seed::StepOutcome};

/// Step name used in logs and errors.
pub const NAME: &str = "medicines";

/// Inserts the baseline medicines unless any medicine already exists.
pub async fn seed(db: &DatabaseConnection) -> Result<StepOutcome, Error> {
    if entity::prelude::Medicine::find().count(db).await? > 0 {
        return Ok(StepOutcome::Skipped);
    }

    let rows = vec![
        build_medicine("Atorvastatin", "Thuốc hạ mỡ máu"),
        build_medicine("Paracetanol", "Thuốc chống đau đầu"),
    ];
    let inserted = rows.len() as u64;

    entity::prelude::Medicine::insert_many(rows)
        .exec(db)
        .await
        .map_err(|source| Error::SeedConstraintViolation { step: NAME, source })?;

    Ok(StepOutcome::Seeded(inserted))
}

fn build_medicine(name: &str, description: &str) -> medicine::ActiveModel {
    medicine::ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        ..Default::default()
    }
}
