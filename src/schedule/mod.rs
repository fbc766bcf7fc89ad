pub mod buckets;
pub mod builder;
pub mod commands;
pub mod conflict;
pub mod error;
pub mod time;

pub use builder::{build_segments, Segment};
pub use conflict::Conflict;
pub use error::ScheduleError;
