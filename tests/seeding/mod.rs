//! Tests for the seeding pipeline: the exact baseline dataset, idempotent
//! re-runs, dependency ordering, and cooperative cancellation.

use entity::doctor_schedule::DayOfWeek;
use entity::user::UserRole;
use medisched::{
    error::Error,
    seed::{self, SeedIds, StepOutcome},
};
use medisched_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use tokio::sync::watch;

fn not_cancelled() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Expect one run on a fresh store to produce the exact baseline dataset
#[tokio::test]
async fn seeds_expected_baseline_dataset() -> Result<(), TestError> {
    let test = test_setup().await?;
    let (_tx, cancel) = not_cancelled();

    let report = seed::seed_baseline_data(&test.db, &cancel)
        .await
        .expect("seeding a fresh store failed");

    assert!(!report.cancelled);
    assert_eq!(report.steps.len(), 8);

    assert_eq!(entity::prelude::User::find().count(&test.db).await?, 5);
    assert_eq!(entity::prelude::Doctor::find().count(&test.db).await?, 2);
    assert_eq!(entity::prelude::Patient::find().count(&test.db).await?, 2);
    assert_eq!(entity::prelude::Specialty::find().count(&test.db).await?, 1);
    assert_eq!(entity::prelude::Disease::find().count(&test.db).await?, 2);
    assert_eq!(entity::prelude::Medicine::find().count(&test.db).await?, 2);
    assert_eq!(entity::prelude::Appointment::find().count(&test.db).await?, 1);
    assert_eq!(
        entity::prelude::DoctorSchedule::find().count(&test.db).await?,
        2
    );
    assert_eq!(entity::prelude::Review::find().count(&test.db).await?, 1);

    // The appointment carries the expected fee, window, and diagnosis link.
    let appointment = entity::prelude::Appointment::find()
        .one(&test.db)
        .await?
        .expect("seeded appointment missing");
    assert_eq!(appointment.fee, seed::appointments::FEE);

    let (start, end) = seed::appointments::booking_window();
    assert_eq!(appointment.appointment_time, start);
    assert_eq!(appointment.appointment_end_time, end);

    let disease = entity::prelude::Disease::find_by_id(
        appointment.disease_id.expect("appointment lost its diagnosis"),
    )
    .one(&test.db)
    .await?
    .expect("diagnosed disease missing");
    assert_eq!(disease.code, "I10");

    // Both schedules belong to the first doctor with the expected windows.
    let monday = entity::prelude::DoctorSchedule::find()
        .filter(entity::doctor_schedule::Column::DayOfWeek.eq(DayOfWeek::Monday))
        .one(&test.db)
        .await?
        .expect("Monday schedule missing");
    assert_eq!(monday.doctor_id, appointment.doctor_id);
    assert_eq!(monday.start_time.to_string(), "09:00:00");
    assert_eq!(monday.end_time.to_string(), "17:00:00");

    let wednesday = entity::prelude::DoctorSchedule::find()
        .filter(entity::doctor_schedule::Column::DayOfWeek.eq(DayOfWeek::Wednesday))
        .one(&test.db)
        .await?
        .expect("Wednesday schedule missing");
    assert_eq!(wednesday.doctor_id, appointment.doctor_id);
    assert_eq!(wednesday.start_time.to_string(), "10:00:00");
    assert_eq!(wednesday.end_time.to_string(), "16:00:00");

    // The review scores the seeded appointment a 5.
    let review = entity::prelude::Review::find()
        .one(&test.db)
        .await?
        .expect("seeded review missing");
    assert_eq!(review.rating, seed::reviews::RATING);
    assert_eq!(review.appointment_id, appointment.id);

    Ok(())
}

/// Expect a second run to skip every step and leave all row counts unchanged
#[tokio::test]
async fn reruns_are_idempotent() -> Result<(), TestError> {
    let test = test_setup().await?;
    let (_tx, cancel) = not_cancelled();

    seed::seed_baseline_data(&test.db, &cancel)
        .await
        .expect("first seeding run failed");

    let report = seed::seed_baseline_data(&test.db, &cancel)
        .await
        .expect("second seeding run failed");

    assert_eq!(report.steps.len(), 8);
    assert!(report
        .steps
        .iter()
        .all(|(_, outcome)| *outcome == StepOutcome::Skipped));

    assert_eq!(entity::prelude::User::find().count(&test.db).await?, 5);
    assert_eq!(entity::prelude::Appointment::find().count(&test.db).await?, 1);
    assert_eq!(entity::prelude::Review::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect the appointment step to fail fast when no doctor has been seeded
#[tokio::test]
async fn appointment_step_requires_prerequisites() -> Result<(), TestError> {
    let test = test_setup().await?;
    let mut ids = SeedIds::default();

    let result = seed::appointments::seed(&test.db, &mut ids).await;

    assert!(matches!(
        result,
        Err(Error::SeedDependencyMissing {
            entity: "doctor",
            ..
        })
    ));

    Ok(())
}

/// Expect the review step to fail fast when no appointment has been seeded
#[tokio::test]
async fn review_step_requires_appointment() -> Result<(), TestError> {
    let test = test_setup().await?;
    let ids = SeedIds::default();

    let result = seed::reviews::seed(&test.db, &ids).await;

    assert!(matches!(
        result,
        Err(Error::SeedDependencyMissing {
            entity: "appointment",
            ..
        })
    ));

    Ok(())
}

/// Expect a pre-signalled cancellation to stop before the first step
#[tokio::test]
async fn pre_cancelled_run_seeds_nothing() -> Result<(), TestError> {
    let test = test_setup().await?;
    let (_tx, cancel) = watch::channel(true);

    let report = seed::seed_baseline_data(&test.db, &cancel)
        .await
        .expect("cancelled run should not error");

    assert!(report.cancelled);
    assert!(report.steps.is_empty());
    assert_eq!(entity::prelude::User::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect a table holding foreign rows to count as seeded, with the broken
/// dependency surfacing in the step that needs the missing baseline rows
#[tokio::test]
async fn foreign_rows_count_as_seeded() -> Result<(), TestError> {
    let test = test_setup().await?;
    let (_tx, cancel) = not_cancelled();

    fixtures::insert_user(&test.db, "someone@else.com", UserRole::Patient).await?;

    let result = seed::seed_baseline_data(&test.db, &cancel).await;

    assert!(matches!(
        result,
        Err(Error::SeedDependencyMissing { entity: "user", .. })
    ));
    // The users step skipped itself instead of re-seeding.
    assert_eq!(entity::prelude::User::find().count(&test.db).await?, 1);

    Ok(())
}
