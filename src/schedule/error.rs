use thiserror::Error;

use crate::schedule::conflict::Conflict;

/// Failure modes of a segmentation pass.
///
/// `FullyBooked` is the expected, recoverable case (the user picked a time
/// that no longer fits); the other variants are defensive backstops for
/// input the form layer should already have rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("invalid time '{0}': expected HH:MM or h:mm AM/PM")]
    InvalidTimeFormat(String),

    #[error("minute offset {0} is outside a single day")]
    InvalidMinuteValue(u32),

    #[error("task '{title}' ends at or before it starts ({start_time}-{end_time})")]
    InvalidTaskRange {
        title: String,
        start_time: String,
        end_time: String,
    },

    #[error("{0}")]
    FullyBooked(Conflict),
}
