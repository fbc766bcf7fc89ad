//! Planner preferences captured during onboarding.
//!
//! Held in memory for the lifetime of the app, like the rest of the
//! planner's state. Times arrive in the onboarding forms' 12-hour form and
//! are kept as sent; they are validated, not canonicalized.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::models::Priority;
use crate::schedule::error::ScheduleError;
use crate::schedule::time::parse_wall_clock;

/// Part of the day the user prefers to study in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StudyWindow {
    Morning,
    Afternoon,
    Night,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannerPreferences {
    pub wake_time: String,
    pub sleep_time: String,
    pub study_window: StudyWindow,
    pub default_priority: Priority,
}

impl Default for PlannerPreferences {
    fn default() -> Self {
        Self {
            wake_time: "7:00 AM".to_string(),
            sleep_time: "11:00 PM".to_string(),
            study_window: StudyWindow::Morning,
            default_priority: Priority::Medium,
        }
    }
}

impl PlannerPreferences {
    /// Both times must parse. Wake/sleep ordering is not constrained;
    /// overnight spans are allowed.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        parse_wall_clock(&self.wake_time)?;
        parse_wall_clock(&self.sleep_time)?;
        Ok(())
    }
}

pub struct SettingsStore {
    data: RwLock<PlannerPreferences>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(PlannerPreferences::default()),
        }
    }

    pub fn preferences(&self) -> PlannerPreferences {
        self.data.read().unwrap().clone()
    }

    pub fn update(&self, preferences: PlannerPreferences) -> Result<PlannerPreferences, ScheduleError> {
        preferences.validate()?;
        let mut guard = self.data.write().unwrap();
        *guard = preferences.clone();
        Ok(preferences)
    }
}
