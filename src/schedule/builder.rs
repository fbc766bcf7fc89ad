//! Hourly segmentation of a day's tasks.
//!
//! One pass walks the task list in caller order, slicing every task into
//! per-hour segments while a per-hour occupancy map enforces the 60-minute
//! capacity of each clock hour. The pass either yields the complete segment
//! list for the day or fails with the first conflict it hits; a caller never
//! sees a partial result.

use std::collections::HashMap;

use log::warn;
use serde::Serialize;

use crate::models::Task;
use crate::schedule::conflict::Conflict;
use crate::schedule::error::ScheduleError;
use crate::schedule::time::{to_minutes, MINUTES_PER_HOUR};

/// The slice of a task that falls within a single clock hour.
///
/// Segments are immutable snapshots: a new segmentation pass always builds a
/// fresh list, it never edits segments from an earlier pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(flatten)]
    pub task: Task,
    /// Minutes since midnight where this slice begins.
    pub segment_start: u32,
    pub segment_duration: u32,
    pub parent_task_id: String,
    /// True for every slice after the first of a task; the day view prefixes
    /// these with a continuation marker.
    pub is_continuation: bool,
}

impl Segment {
    pub fn hour(&self) -> u32 {
        self.segment_start / MINUTES_PER_HOUR
    }

    /// Offset of this slice within its hour (0-59).
    pub fn start_within_hour(&self) -> u32 {
        self.segment_start % MINUTES_PER_HOUR
    }
}

/// Slice a day's tasks into hour-bounded segments.
///
/// Tasks are processed in the order given: the store hands them over in
/// insertion order, and which of two overlapping tasks loses a contested
/// hour depends on that order, not on their start times.
///
/// A segment never crosses an hour boundary, so a boundary-crossing task
/// yields one segment per hour it touches. Before a slice is allocated the
/// hour's remaining capacity is checked; if the slice does not fit, the
/// whole pass fails with `FullyBooked` and no segment exists for the losing
/// task. Ranges that end at or before their start (including anything that
/// would cross midnight) are rejected.
pub fn build_segments(tasks: &[Task]) -> Result<Vec<Segment>, ScheduleError> {
    let mut segments = Vec::new();
    let mut occupied: HashMap<u32, u32> = HashMap::new();

    for task in tasks {
        let (start, end) = task_range(task)?;

        let mut cursor = start;
        let mut remaining = end - start;
        let mut segment_index = 0u32;

        while remaining > 0 {
            let hour = cursor / MINUTES_PER_HOUR;
            let used = occupied.get(&hour).copied().unwrap_or(0);
            let available = MINUTES_PER_HOUR - used;
            // A slice never runs past the top of its hour.
            let needed = remaining.min(MINUTES_PER_HOUR - cursor % MINUTES_PER_HOUR);

            if needed > available {
                return Err(ScheduleError::FullyBooked(Conflict {
                    hour,
                    task: task.clone(),
                    available_minutes: available,
                }));
            }

            segments.push(Segment {
                task: task.clone(),
                segment_start: cursor,
                segment_duration: needed,
                parent_task_id: task.id.clone(),
                is_continuation: segment_index > 0,
            });

            occupied.insert(hour, used + needed);
            cursor += needed;
            remaining -= needed;
            segment_index += 1;
        }
    }

    Ok(segments)
}

/// Parse and sanity-check a task's wall-clock range.
///
/// The form layer already validates this; anything caught here is an
/// integration bug worth a log line, not a silent skip.
fn task_range(task: &Task) -> Result<(u32, u32), ScheduleError> {
    let parsed = to_minutes(&task.start_time)
        .and_then(|start| to_minutes(&task.end_time).map(|end| (start, end)));

    let (start, end) = match parsed {
        Ok(range) => range,
        Err(err) => {
            warn!("task {} has an unparseable time range: {err}", task.id);
            return Err(err);
        }
    };

    if end <= start {
        warn!(
            "task {} has a reversed time range ({}-{})",
            task.id, task.start_time, task.end_time
        );
        return Err(ScheduleError::InvalidTaskRange {
            title: task.title.clone(),
            start_time: task.start_time.clone(),
            end_time: task.end_time.clone(),
        });
    }

    Ok((start, end))
}
