use sea_orm::entity::prelude::{DateTime, Time};
use thiserror::Error;

/// Domain invariant violations caught at entity construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("appointment end time {end} is not after start time {start}")]
    AppointmentWindow { start: DateTime, end: DateTime },
    #[error("appointment fee must be non-negative, got {0}")]
    NegativeFee(i64),
    #[error("schedule start time {start} is not before end time {end}")]
    ScheduleWindow { start: Time, end: Time },
    #[error("slot duration must be positive, got {0} minutes")]
    SlotDuration(i32),
    #[error("slot duration of {minutes} minutes does not evenly divide a {window_minutes} minute window")]
    SlotWindowMismatch { minutes: i32, window_minutes: i64 },
    #[error("review rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i32),
}
