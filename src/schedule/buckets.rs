//! Read-only grouping of segments by hour of day.
//!
//! Everything here is a pure query over an already-built segment list; the
//! day view calls these once per render and nothing is cached or mutated.

use serde::Serialize;

use crate::schedule::builder::Segment;
use crate::schedule::time::{hour_label, hour_slot_label, HOURS_PER_DAY, MINUTES_PER_HOUR};

/// Segments whose slice begins inside the given hour, ascending by start.
pub fn segments_for_hour(hour: u32, segments: &[Segment]) -> Vec<Segment> {
    let start_of_hour = hour * MINUTES_PER_HOUR;
    let end_of_hour = start_of_hour + MINUTES_PER_HOUR;

    let mut in_hour: Vec<Segment> = segments
        .iter()
        .filter(|s| s.segment_start >= start_of_hour && s.segment_start < end_of_hour)
        .cloned()
        .collect();
    in_hour.sort_by_key(|s| s.segment_start);
    in_hour
}

/// Allocated minutes within the given hour.
pub fn minutes_used(hour: u32, segments: &[Segment]) -> u32 {
    segments
        .iter()
        .filter(|s| s.hour() == hour)
        .map(|s| s.segment_duration)
        .sum()
}

pub fn is_hour_full(hour: u32, segments: &[Segment]) -> bool {
    minutes_used(hour, segments) >= MINUTES_PER_HOUR
}

/// One hour card of the day grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourBucket {
    pub hour: u32,
    /// `"09:00"`, the caption of the flat day grid.
    pub label: String,
    /// `"9 AM"`, the caption of the sectioned day view.
    pub meridiem_label: String,
    pub segments: Vec<Segment>,
    pub used_minutes: u32,
    pub is_full: bool,
}

/// All 24 hour cards for one day's segments.
pub fn bucket_day(segments: &[Segment]) -> Vec<HourBucket> {
    (0..HOURS_PER_DAY)
        .map(|hour| {
            let in_hour = segments_for_hour(hour, segments);
            let used: u32 = in_hour.iter().map(|s| s.segment_duration).sum();
            HourBucket {
                hour,
                label: hour_slot_label(hour),
                meridiem_label: hour_label(hour),
                segments: in_hour,
                used_minutes: used,
                is_full: used >= MINUTES_PER_HOUR,
            }
        })
        .collect()
}

/// A named stretch of the day rendered as one group of hour cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySection {
    pub name: &'static str,
    pub buckets: Vec<HourBucket>,
}

// Night wraps past midnight and picks up the small hours.
const SECTIONS: [(&str, u32, u32, Option<(u32, u32)>); 4] = [
    ("Morning", 5, 11, None),
    ("Afternoon", 12, 16, None),
    ("Evening", 17, 20, None),
    ("Night", 21, 23, Some((0, 4))),
];

/// The day's hour cards grouped into Morning/Afternoon/Evening/Night.
pub fn section_day(segments: &[Segment]) -> Vec<DaySection> {
    let buckets = bucket_day(segments);

    SECTIONS
        .iter()
        .map(|&(name, start, end, extra)| {
            let mut picked: Vec<HourBucket> = buckets
                .iter()
                .filter(|b| b.hour >= start && b.hour <= end)
                .cloned()
                .collect();
            if let Some((extra_start, extra_end)) = extra {
                picked.extend(
                    buckets
                        .iter()
                        .filter(|b| b.hour >= extra_start && b.hour <= extra_end)
                        .cloned(),
                );
            }
            DaySection {
                name,
                buckets: picked,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_task;
    use crate::schedule::builder::build_segments;

    fn day_segments() -> Vec<Segment> {
        build_segments(&[
            sample_task("t1", "09:15", "09:45"),
            sample_task("t2", "08:50", "09:05"),
            sample_task("t3", "22:00", "23:00"),
        ])
        .expect("segmentation should succeed")
    }

    #[test]
    fn hour_query_sorts_by_segment_start() {
        let segments = day_segments();
        let hour_nine = segments_for_hour(9, &segments);

        // t2's continuation (09:00) sorts before t1 (09:15) even though t1
        // was produced later in the pass.
        assert_eq!(hour_nine.len(), 2);
        assert_eq!(hour_nine[0].parent_task_id, "t2");
        assert_eq!(hour_nine[0].segment_start, 540);
        assert_eq!(hour_nine[1].parent_task_id, "t1");
        assert_eq!(hour_nine[1].segment_start, 555);
    }

    #[test]
    fn minutes_used_sums_the_hour() {
        let segments = day_segments();
        assert_eq!(minutes_used(8, &segments), 10);
        assert_eq!(minutes_used(9, &segments), 35);
        assert_eq!(minutes_used(22, &segments), 60);
        assert_eq!(minutes_used(12, &segments), 0);
    }

    #[test]
    fn full_hour_is_reported_full() {
        let segments = day_segments();
        assert!(is_hour_full(22, &segments));
        assert!(!is_hour_full(9, &segments));
    }

    #[test]
    fn bucket_day_covers_all_twenty_four_hours() {
        let buckets = bucket_day(&day_segments());
        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[9].label, "09:00");
        assert_eq!(buckets[9].meridiem_label, "9 AM");
        assert_eq!(buckets[9].used_minutes, 35);
        assert!(buckets[22].is_full);
        assert!(buckets[12].segments.is_empty());
    }

    #[test]
    fn sections_cover_every_hour_once_with_night_wrap() {
        let sections = section_day(&day_segments());
        assert_eq!(sections.len(), 4);

        let mut seen: Vec<u32> = sections
            .iter()
            .flat_map(|s| s.buckets.iter().map(|b| b.hour))
            .collect();
        assert_eq!(seen.len(), 24);
        seen.sort_unstable();
        assert_eq!(seen, (0..24).collect::<Vec<_>>());

        let night = &sections[3];
        assert_eq!(night.name, "Night");
        let night_hours: Vec<u32> = night.buckets.iter().map(|b| b.hour).collect();
        assert_eq!(night_hours, vec![21, 22, 23, 0, 1, 2, 3, 4]);
    }
}
