//! Seed step: disease catalog.

use entity::disease;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};

use crate::{
    error::Error,
    seed::{SeedIds, StepOutcome},
};

/// Step name used in logs and errors.
pub const NAME: &str = "diseases";

/// Code of the disease the seeded appointment is diagnosed with.
pub const HYPERTENSION_CODE: &str = "I10";
const MIGRAINE_CODE: &str = "I11";

/// Inserts the baseline diseases unless any disease already exists, then
/// resolves the seed codes to ids.
pub async fn seed(db: &DatabaseConnection, ids: &mut SeedIds) -> Result<StepOutcome, Error> {
    let outcome = if entity::prelude::Disease::find().count(db).await? > 0 {
        StepOutcome::Skipped
    } else {
        let rows = vec![
            build_disease(HYPERTENSION_CODE, "Tăng huyết áp"),
            build_disease(MIGRAINE_CODE, "Đau nửa đầu"),
        ];
        let inserted = rows.len() as u64;

        entity::prelude::Disease::insert_many(rows)
            .exec(db)
            .await
            .map_err(|source| Error::SeedConstraintViolation { step: NAME, source })?;

        StepOutcome::Seeded(inserted)
    };

    let found = entity::prelude::Disease::find()
        .filter(disease::Column::Code.is_in([HYPERTENSION_CODE, MIGRAINE_CODE]))
        .all(db)
        .await?;
    for disease in found {
        ids.diseases.insert(disease.code, disease.id);
    }

    Ok(outcome)
}

fn build_disease(code: &str, name: &str) -> disease::ActiveModel {
    disease::ActiveModel {
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        ..Default::default()
    }
}
