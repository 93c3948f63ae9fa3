pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_users_table;
mod m20260110_000002_create_specialties_table;
mod m20260110_000003_create_doctors_table;
mod m20260110_000004_create_patients_table;
mod m20260110_000005_create_diseases_table;
mod m20260110_000006_create_medicines_table;
mod m20260110_000007_create_appointments_table;
mod m20260110_000008_create_reviews_table;
mod m20260204_000001_rename_doctor_review_count;
mod m20260204_000002_add_booking_timestamps;
mod m20260204_000003_create_doctor_schedules_table;
mod m20260204_000004_appointment_optional_disease;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_users_table::Migration),
            Box::new(m20260110_000002_create_specialties_table::Migration),
            Box::new(m20260110_000003_create_doctors_table::Migration),
            Box::new(m20260110_000004_create_patients_table::Migration),
            Box::new(m20260110_000005_create_diseases_table::Migration),
            Box::new(m20260110_000006_create_medicines_table::Migration),
            Box::new(m20260110_000007_create_appointments_table::Migration),
            Box::new(m20260110_000008_create_reviews_table::Migration),
            Box::new(m20260204_000001_rename_doctor_review_count::Migration),
            Box::new(m20260204_000002_add_booking_timestamps::Migration),
            Box::new(m20260204_000003_create_doctor_schedules_table::Migration),
            Box::new(m20260204_000004_appointment_optional_disease::Migration),
        ]
    }
}
