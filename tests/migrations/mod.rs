//! Tests for the schema migration set: exactly-once application,
//! reversibility of the February revision, and declared cascade rules.

use entity::user::UserRole;
use medisched_test_utils::prelude::*;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, PaginatorTrait, Statement,
};

/// Column name plus NOT NULL flag, from SQLite's table_info pragma.
async fn column_info(
    db: &DatabaseConnection,
    table: &str,
) -> Result<Vec<(String, bool)>, TestError> {
    let rows = db
        .query_all_raw(Statement::from_string(
            DbBackend::Sqlite,
            format!("PRAGMA table_info(\"{table}\")"),
        ))
        .await?;

    rows.iter()
        .map(|row| {
            Ok((
                row.try_get::<String>("", "name")?,
                row.try_get::<i32>("", "notnull")? != 0,
            ))
        })
        .collect()
}

fn has_column(columns: &[(String, bool)], name: &str) -> bool {
    columns.iter().any(|(column, _)| column == name)
}

fn is_not_null(columns: &[(String, bool)], name: &str) -> Option<bool> {
    columns
        .iter()
        .find(|(column, _)| column == name)
        .map(|(_, not_null)| *not_null)
}

async fn table_exists(db: &DatabaseConnection, table: &str) -> Result<bool, TestError> {
    let rows = db
        .query_all_raw(Statement::from_string(
            DbBackend::Sqlite,
            format!("SELECT name FROM sqlite_master WHERE type = 'table' AND name = '{table}'"),
        ))
        .await?;

    Ok(!rows.is_empty())
}

/// Expect a fresh store to end up fully migrated and writable
#[tokio::test]
async fn applies_full_migration_set() -> Result<(), TestError> {
    let test = test_setup().await?;

    let pending = Migrator::get_pending_migrations(&test.db)
        .await
        .expect("failed to read migration status");
    assert!(pending.is_empty());

    // All tables exist and accept rows.
    let user = fixtures::insert_user(&test.db, "smoke@test.com", UserRole::Doctor).await?;
    fixtures::insert_doctor(&test.db, user.id).await?;
    fixtures::insert_schedule(&test.db, user.id).await?;

    Ok(())
}

/// Expect re-running the migrator on a migrated store to be a no-op
#[tokio::test]
async fn up_is_idempotent_when_rerun() -> Result<(), TestError> {
    let test = test_setup().await?;

    Migrator::up(&test.db, None).await?;

    let pending = Migrator::get_pending_migrations(&test.db)
        .await
        .expect("failed to read migration status");
    assert!(pending.is_empty());

    Ok(())
}

/// Expect rolling back the February revision to restore the pre-revision
/// schema exactly, and re-applying it to bring the new shape back
#[tokio::test]
async fn schema_revision_round_trips() -> Result<(), TestError> {
    let test = test_setup().await?;

    // Roll back the four revision migrations.
    Migrator::down(&test.db, Some(4)).await?;

    let doctors = column_info(&test.db, "Doctors").await?;
    assert!(has_column(&doctors, "AppointmentCount"));
    assert!(!has_column(&doctors, "ReviewCount"));

    assert!(!table_exists(&test.db, "DoctorSchedules").await?);

    let appointments = column_info(&test.db, "Appointments").await?;
    assert!(!has_column(&appointments, "AppointmentEndTime"));
    assert!(!has_column(&appointments, "CreatedAt"));
    assert_eq!(is_not_null(&appointments, "DiseaseId"), Some(true));

    let reviews = column_info(&test.db, "Reviews").await?;
    assert!(!has_column(&reviews, "CreatedAt"));

    // Re-apply and verify the revised shape.
    Migrator::up(&test.db, None).await?;

    let doctors = column_info(&test.db, "Doctors").await?;
    assert!(has_column(&doctors, "ReviewCount"));
    assert!(!has_column(&doctors, "AppointmentCount"));

    assert!(table_exists(&test.db, "DoctorSchedules").await?);

    let appointments = column_info(&test.db, "Appointments").await?;
    assert!(has_column(&appointments, "AppointmentEndTime"));
    assert!(has_column(&appointments, "CreatedAt"));
    assert_eq!(is_not_null(&appointments, "DiseaseId"), Some(false));

    Ok(())
}

/// Expect rows written under the pre-revision schema to survive the
/// revision migrations, including reviews of rebuilt appointments
#[tokio::test]
async fn revision_preserves_existing_rows() -> Result<(), TestError> {
    let test = test_setup_bare().await?;

    // Stop at the pre-revision schema and populate it directly.
    Migrator::up(&test.db, Some(8)).await?;

    test.db
        .execute_unprepared(
            r#"
            INSERT INTO "Users" ("Email", "Password", "Role") VALUES
                ('legacy@doctor.com', 'pw', 1),
                ('legacy@patient.com', 'pw', 2);
            INSERT INTO "Doctors" ("UserId", "ExperienceYears", "ConsultationFee") VALUES (1, 3, 100000);
            INSERT INTO "Patients" ("UserId", "BloodType", "DiseaseHistory", "RelativePhoneNumber")
                VALUES (2, 0, '', '111-222-3333');
            INSERT INTO "Diseases" ("Code", "Name") VALUES ('J00', 'Cảm lạnh');
            INSERT INTO "Appointments" ("PatientId", "DoctorId", "DiseaseId", "AppointmentTime", "Fee", "Diagnosis")
                VALUES (2, 1, 1, '2025-11-03 09:00:00', 100000, 'legacy booking');
            INSERT INTO "Reviews" ("AppointmentId", "Rating", "Comment") VALUES (1, 4, 'ok');
            "#,
        )
        .await?;

    Migrator::up(&test.db, None).await?;

    let appointment = entity::prelude::Appointment::find()
        .one(&test.db)
        .await?
        .expect("appointment lost by the revision");
    assert_eq!(appointment.disease_id, Some(1));

    let review = entity::prelude::Review::find()
        .one(&test.db)
        .await?
        .expect("review lost by the revision");
    assert_eq!(review.appointment_id, appointment.id);
    assert_eq!(review.rating, 4);

    Ok(())
}

/// Expect deleting a doctor to cascade into its schedules
#[tokio::test]
async fn deleting_doctor_cascades_schedules() -> Result<(), TestError> {
    let test = test_setup().await?;

    let user = fixtures::insert_user(&test.db, "cascade@doctor.com", UserRole::Doctor).await?;
    let doctor = fixtures::insert_doctor(&test.db, user.id).await?;
    fixtures::insert_schedule(&test.db, doctor.user_id).await?;

    entity::prelude::Doctor::delete_by_id(doctor.user_id)
        .exec(&test.db)
        .await?;

    let schedules = entity::prelude::DoctorSchedule::find().count(&test.db).await?;
    assert_eq!(schedules, 0);

    Ok(())
}

/// Expect a doctor with appointments to be protected from deletion so no
/// appointment row is ever orphaned
#[tokio::test]
async fn doctor_with_appointments_cannot_be_deleted() -> Result<(), TestError> {
    let test = test_setup().await?;

    let doctor_user = fixtures::insert_user(&test.db, "busy@doctor.com", UserRole::Doctor).await?;
    let doctor = fixtures::insert_doctor(&test.db, doctor_user.id).await?;
    let patient_user = fixtures::insert_user(&test.db, "sick@patient.com", UserRole::Patient).await?;
    let patient = fixtures::insert_patient(&test.db, patient_user.id).await?;
    fixtures::insert_appointment(&test.db, doctor.user_id, patient.user_id, None).await?;

    let result = entity::prelude::Doctor::delete_by_id(doctor.user_id)
        .exec(&test.db)
        .await;

    assert!(result.is_err());
    let appointments = entity::prelude::Appointment::find().count(&test.db).await?;
    assert_eq!(appointments, 1);

    Ok(())
}
