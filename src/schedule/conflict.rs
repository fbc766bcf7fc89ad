use std::fmt;

use serde::Serialize;

use crate::models::Task;

/// Raised when allocating a task's minutes would push an hour past 60.
///
/// `available_minutes` is what was still free in the hour when the losing
/// task asked for more.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub hour: u32,
    pub task: Task,
    pub available_minutes: u32,
}

impl Conflict {
    /// The one user-facing rendering of a booking conflict. Every surface
    /// that shows one (toast, inline banner, log line) goes through here.
    pub fn message(&self) -> String {
        format!("{:02}:00 is fully booked.", self.hour)
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_task;

    #[test]
    fn message_names_the_overbooked_hour() {
        let conflict = Conflict {
            hour: 9,
            task: sample_task("t1", "09:00", "10:00"),
            available_minutes: 15,
        };
        assert_eq!(conflict.message(), "09:00 is fully booked.");
        assert_eq!(conflict.to_string(), "09:00 is fully booked.");
    }

    #[test]
    fn message_pads_single_digit_hours() {
        let conflict = Conflict {
            hour: 7,
            task: sample_task("t1", "07:00", "08:00"),
            available_minutes: 0,
        };
        assert_eq!(conflict.message(), "07:00 is fully booked.");
    }
}
