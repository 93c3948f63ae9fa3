//! Database entity definitions for the clinic appointment schema.
//!
//! Each module maps one table of the persisted schema to a SeaORM entity.
//! Entities whose rows carry domain invariants (appointments, schedules,
//! reviews) expose fallible `ActiveModel::try_new` constructors so invalid
//! rows are rejected before they ever reach the store.

pub mod appointment;
pub mod disease;
pub mod doctor;
pub mod doctor_schedule;
pub mod error;
pub mod medicine;
pub mod patient;
pub mod prelude;
pub mod review;
pub mod specialty;
pub mod user;

pub use error::ValidationError;
