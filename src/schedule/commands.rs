use chrono::NaiveDate;
use serde::Serialize;
use tauri::State;

use crate::schedule::buckets::{self, DaySection};
use crate::schedule::builder::{build_segments, Segment};
use crate::schedule::time::{hour_slot_label, HOURS_PER_DAY, MINUTES_PER_HOUR};
use crate::AppState;

/// One segmentation pass over the selected date's tasks. The day view calls
/// this once per render; on conflict the error string is the toast text.
#[tauri::command]
pub fn build_day_segments(
    state: State<'_, AppState>,
    date: NaiveDate,
) -> Result<Vec<Segment>, String> {
    let tasks = state.store.tasks_for_date(date);
    build_segments(&tasks).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_day_overview(
    state: State<'_, AppState>,
    date: NaiveDate,
) -> Result<Vec<DaySection>, String> {
    let tasks = state.store.tasks_for_date(date);
    let segments = build_segments(&tasks).map_err(|e| e.to_string())?;
    Ok(buckets::section_day(&segments))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourOccupancy {
    pub hour: u32,
    pub label: String,
    pub used_minutes: u32,
    pub is_full: bool,
}

/// Occupancy of one hour, for the pre-click "fully booked" check on an hour
/// card.
#[tauri::command]
pub fn get_hour_occupancy(
    state: State<'_, AppState>,
    date: NaiveDate,
    hour: u32,
) -> Result<HourOccupancy, String> {
    if hour >= HOURS_PER_DAY {
        return Err(format!("hour {hour} is out of range (0-23)"));
    }

    let tasks = state.store.tasks_for_date(date);
    let segments = build_segments(&tasks).map_err(|e| e.to_string())?;
    let used_minutes = buckets::minutes_used(hour, &segments);

    Ok(HourOccupancy {
        hour,
        label: hour_slot_label(hour),
        used_minutes,
        is_full: used_minutes >= MINUTES_PER_HOUR,
    })
}
