//! Idempotent baseline seeding.
//!
//! The pipeline is an ordered list of steps; each step checks whether its
//! target table already holds rows and skips itself if so, otherwise it
//! builds fully-validated entities and persists them in a single committed
//! batch. Later steps read identifiers collected by earlier ones through
//! [`SeedIds`] rather than fetching "the first row of a type", so the
//! pipeline is correct regardless of the identifiers the store generates.
//!
//! The existence check is deliberately scoped to the whole table, not to the
//! specific seed values: a partially populated table counts as seeded and is
//! never updated or pruned. A table filled with foreign rows therefore
//! surfaces as [`Error::SeedDependencyMissing`] in a later step instead of
//! being silently re-seeded.

pub mod appointments;
pub mod diseases;
pub mod doctors_patients;
pub mod medicines;
pub mod reviews;
pub mod schedules;
pub mod specialties;
pub mod users;

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::error::Error;

/// Outcome of a single seed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step inserted this many rows in one batch.
    Seeded(u64),
    /// The target table already held rows; nothing was written.
    Skipped,
}

/// Identifiers collected while the pipeline runs, threaded into later steps.
///
/// Steps fill their portion whether they insert or skip; on the skip path
/// they re-resolve identifiers by defining attribute (email, disease code,
/// appointment doctor/patient/start-time) so a re-run still wires the steps
/// that come after.
#[derive(Debug, Default)]
pub struct SeedIds {
    /// User ids keyed by email.
    pub users: HashMap<String, i32>,
    /// Doctor user-ids, in seed declaration order.
    pub doctors: Vec<i32>,
    /// Patient user-ids, in seed declaration order.
    pub patients: Vec<i32>,
    /// Disease ids keyed by ICD-style code.
    pub diseases: HashMap<String, i32>,
    /// Id of the seeded appointment, once known.
    pub appointment: Option<i32>,
}

/// What a seeding run did, step by step.
#[derive(Debug)]
pub struct SeedReport {
    /// Steps that ran, in order, with their outcomes.
    pub steps: Vec<(&'static str, StepOutcome)>,
    /// True when the run stopped early because cancellation was requested.
    /// Committed steps stay committed; the next run picks up the rest.
    pub cancelled: bool,
}

/// Runs all seed steps in dependency order.
///
/// The cancellation signal is checked between steps only; a started step
/// runs to completion or failure. Any step error is fatal and already
/// committed steps are not rolled back.
pub async fn seed_baseline_data(
    db: &DatabaseConnection,
    cancel: &watch::Receiver<bool>,
) -> Result<SeedReport, Error> {
    info!("starting baseline seeding");

    let mut ids = SeedIds::default();
    let mut report = SeedReport {
        steps: Vec::new(),
        cancelled: false,
    };

    if cancelled(cancel, &mut report) {
        return Ok(report);
    }
    let outcome = users::seed(db, &mut ids).await.map_err(step_failure)?;
    record(users::NAME, outcome, &mut report);

    if cancelled(cancel, &mut report) {
        return Ok(report);
    }
    let outcome = specialties::seed(db).await.map_err(step_failure)?;
    record(specialties::NAME, outcome, &mut report);

    if cancelled(cancel, &mut report) {
        return Ok(report);
    }
    let outcome = doctors_patients::seed(db, &mut ids)
        .await
        .map_err(step_failure)?;
    record(doctors_patients::NAME, outcome, &mut report);

    if cancelled(cancel, &mut report) {
        return Ok(report);
    }
    let outcome = diseases::seed(db, &mut ids).await.map_err(step_failure)?;
    record(diseases::NAME, outcome, &mut report);

    if cancelled(cancel, &mut report) {
        return Ok(report);
    }
    let outcome = medicines::seed(db).await.map_err(step_failure)?;
    record(medicines::NAME, outcome, &mut report);

    if cancelled(cancel, &mut report) {
        return Ok(report);
    }
    let outcome = appointments::seed(db, &mut ids).await.map_err(step_failure)?;
    record(appointments::NAME, outcome, &mut report);

    if cancelled(cancel, &mut report) {
        return Ok(report);
    }
    let outcome = schedules::seed(db, &ids).await.map_err(step_failure)?;
    record(schedules::NAME, outcome, &mut report);

    if cancelled(cancel, &mut report) {
        return Ok(report);
    }
    let outcome = reviews::seed(db, &ids).await.map_err(step_failure)?;
    record(reviews::NAME, outcome, &mut report);

    info!("baseline seeding completed");

    Ok(report)
}

fn cancelled(cancel: &watch::Receiver<bool>, report: &mut SeedReport) -> bool {
    if *cancel.borrow() {
        warn!(
            completed_steps = report.steps.len(),
            "cancellation requested, stopping between seed steps"
        );
        report.cancelled = true;
        true
    } else {
        false
    }
}

fn record(name: &'static str, outcome: StepOutcome, report: &mut SeedReport) {
    match outcome {
        StepOutcome::Seeded(rows) => info!(step = name, rows, "seeded"),
        StepOutcome::Skipped => debug!(step = name, "already seeded, skipping"),
    }
    report.steps.push((name, outcome));
}

fn step_failure(err: Error) -> Error {
    error!(error = %err, "seed step failed, aborting remaining steps");
    err
}
