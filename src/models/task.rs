//! Task data model shared by the store, the scheduler, and the UI layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::error::ScheduleError;
use crate::schedule::time::{parse_wall_clock, to_time_string};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// A scheduled task on one calendar date.
///
/// `start_time`/`end_time` are canonical `"HH:MM"` strings; the store
/// normalizes whatever form the caller sent before a task is created.
/// `color` is an opaque display tag and `priority` is passed through to the
/// UI uninterpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a task; the store mints the id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub date: NaiveDate,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update for an existing task; absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub color: Option<String>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
}

/// Validation and lookup failures at the store boundary.
///
/// The messages mirror the form layer's, so a payload that slipped past the
/// frontend reads the same to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    #[error("Task title is required")]
    EmptyTitle,
    #[error("Color is required")]
    EmptyColor,
    #[error("End time must be after start time")]
    EndNotAfterStart,
    #[error(transparent)]
    Time(#[from] ScheduleError),
    #[error("no task with id {0}")]
    NotFound(String),
}

impl NewTask {
    /// Validate the payload and return its times canonicalized to `"HH:MM"`,
    /// whichever wall-clock form the caller sent.
    pub fn validate(&self) -> Result<(String, String), TaskError> {
        if self.title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if self.color.trim().is_empty() {
            return Err(TaskError::EmptyColor);
        }

        let start = parse_wall_clock(&self.start_time)?;
        let end = parse_wall_clock(&self.end_time)?;
        if end <= start {
            return Err(TaskError::EndNotAfterStart);
        }

        Ok((to_time_string(start)?, to_time_string(end)?))
    }
}

#[cfg(test)]
pub(crate) fn sample_task(id: &str, start_time: &str, end_time: &str) -> Task {
    let fixed = DateTime::parse_from_rfc3339("2025-11-20T08:00:00Z")
        .expect("valid datetime")
        .with_timezone(&Utc);

    Task {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 11, 20).expect("valid date"),
        title: format!("Task {id}"),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        color: "#60A5FA".to_string(),
        priority: Priority::Medium,
        description: None,
        created_at: fixed,
        updated_at: fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> NewTask {
        NewTask {
            date: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            title: "Team Sync".to_string(),
            start_time: "09:15".to_string(),
            end_time: "09:45".to_string(),
            color: "#60A5FA".to_string(),
            priority: Priority::Medium,
            description: Some("Daily sync".to_string()),
        }
    }

    #[test]
    fn valid_payload_passes() {
        let (start, end) = sample_payload().validate().unwrap();
        assert_eq!(start, "09:15");
        assert_eq!(end, "09:45");
    }

    #[test]
    fn twelve_hour_times_are_canonicalized() {
        let mut payload = sample_payload();
        payload.start_time = "9:15 AM".to_string();
        payload.end_time = "2:30 PM".to_string();

        let (start, end) = payload.validate().unwrap();
        assert_eq!(start, "09:15");
        assert_eq!(end, "14:30");
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut payload = sample_payload();
        payload.title = "   ".to_string();
        assert_eq!(payload.validate(), Err(TaskError::EmptyTitle));
    }

    #[test]
    fn blank_color_is_rejected() {
        let mut payload = sample_payload();
        payload.color = String::new();
        assert_eq!(payload.validate(), Err(TaskError::EmptyColor));
    }

    #[test]
    fn reversed_times_are_rejected() {
        let mut payload = sample_payload();
        payload.start_time = "10:00".to_string();
        payload.end_time = "09:00".to_string();
        assert_eq!(payload.validate(), Err(TaskError::EndNotAfterStart));
    }

    #[test]
    fn unparseable_time_is_rejected() {
        let mut payload = sample_payload();
        payload.start_time = "soonish".to_string();
        assert!(matches!(payload.validate(), Err(TaskError::Time(_))));
    }

    #[test]
    fn task_serializes_camel_case() {
        let task = sample_task("t1", "09:00", "10:00");
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["id"], "t1");
        assert_eq!(value["date"], "2025-11-20");
        assert_eq!(value["startTime"], "09:00");
        assert_eq!(value["endTime"], "10:00");
        assert_eq!(value["priority"], "medium");
        assert!(value.get("description").is_none());
    }
}
