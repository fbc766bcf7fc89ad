//! Wall-clock conversions for the planner core.
//!
//! A time of day is a minute offset since midnight (0-1439). All conversions
//! are timezone-naive; the planner only ever reasons about a single calendar
//! date at a time.

use crate::schedule::error::ScheduleError;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const HOURS_PER_DAY: u32 = 24;
pub const MINUTES_PER_DAY: u32 = HOURS_PER_DAY * MINUTES_PER_HOUR;

/// Parse a 24-hour `"HH:MM"` string into minutes since midnight.
pub fn to_minutes(time: &str) -> Result<u32, ScheduleError> {
    let invalid = || ScheduleError::InvalidTimeFormat(time.to_string());

    let (hours_part, minutes_part) = time.split_once(':').ok_or_else(invalid)?;
    if hours_part.len() != 2 || minutes_part.len() != 2 {
        return Err(invalid());
    }

    let hours: u32 = hours_part.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes_part.parse().map_err(|_| invalid())?;
    if hours >= HOURS_PER_DAY || minutes >= MINUTES_PER_HOUR {
        return Err(invalid());
    }

    Ok(hours * MINUTES_PER_HOUR + minutes)
}

/// Format minutes since midnight back to `"HH:MM"`.
pub fn to_time_string(minutes: u32) -> Result<String, ScheduleError> {
    if minutes >= MINUTES_PER_DAY {
        return Err(ScheduleError::InvalidMinuteValue(minutes));
    }
    Ok(format!(
        "{:02}:{:02}",
        minutes / MINUTES_PER_HOUR,
        minutes % MINUTES_PER_HOUR
    ))
}

/// Parse a 12-hour `"h:MM AM"` / `"h:MM PM"` string into minutes since
/// midnight. The onboarding forms and the older task schema send this
/// representation; a leading zero and the space before the period are both
/// optional.
pub fn twelve_hour_to_minutes(time: &str) -> Result<u32, ScheduleError> {
    let invalid = || ScheduleError::InvalidTimeFormat(time.to_string());

    let upper = time.trim().to_uppercase();
    let (clock, period) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), "AM")
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), "PM")
    } else {
        return Err(invalid());
    };

    let (hours_part, minutes_part) = clock.split_once(':').ok_or_else(invalid)?;
    if hours_part.is_empty() || hours_part.len() > 2 || minutes_part.len() != 2 {
        return Err(invalid());
    }

    let mut hours: u32 = hours_part.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes_part.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hours) || minutes >= MINUTES_PER_HOUR {
        return Err(invalid());
    }

    if period == "PM" && hours != 12 {
        hours += 12;
    }
    if period == "AM" && hours == 12 {
        hours = 0;
    }

    Ok(hours * MINUTES_PER_HOUR + minutes)
}

/// Accept either wall-clock representation, whichever the caller sent.
pub fn parse_wall_clock(time: &str) -> Result<u32, ScheduleError> {
    to_minutes(time).or_else(|_| twelve_hour_to_minutes(time))
}

/// `"HH:00"` caption for an hour card in the day grid.
pub fn hour_slot_label(hour: u32) -> String {
    format!("{hour:02}:00")
}

/// 12-hour caption for an hour of day: `0 -> "12 AM"`, `13 -> "1 PM"`.
pub fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        h if h < 12 => format!("{h} AM"),
        12 => "12 PM".to_string(),
        h => format!("{} PM", h - 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_twenty_four_hour_times() {
        assert_eq!(to_minutes("00:00").unwrap(), 0);
        assert_eq!(to_minutes("09:15").unwrap(), 555);
        assert_eq!(to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["", "9:15", "24:00", "12:60", "12-30", "ab:cd", "12:5"] {
            assert!(
                matches!(to_minutes(bad), Err(ScheduleError::InvalidTimeFormat(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn formats_minutes_back_to_wall_clock() {
        assert_eq!(to_time_string(0).unwrap(), "00:00");
        assert_eq!(to_time_string(555).unwrap(), "09:15");
        assert_eq!(to_time_string(1439).unwrap(), "23:59");
        assert_eq!(
            to_time_string(1440),
            Err(ScheduleError::InvalidMinuteValue(1440))
        );
    }

    #[test]
    fn parses_twelve_hour_times() {
        assert_eq!(twelve_hour_to_minutes("12:00 AM").unwrap(), 0);
        assert_eq!(twelve_hour_to_minutes("9:15 AM").unwrap(), 555);
        assert_eq!(twelve_hour_to_minutes("09:15AM").unwrap(), 555);
        assert_eq!(twelve_hour_to_minutes("12:00 PM").unwrap(), 720);
        assert_eq!(twelve_hour_to_minutes("11:30 pm").unwrap(), 1410);
        assert!(twelve_hour_to_minutes("13:00 PM").is_err());
        assert!(twelve_hour_to_minutes("0:30 AM").is_err());
    }

    #[test]
    fn flexible_parser_accepts_both_forms() {
        assert_eq!(parse_wall_clock("14:30").unwrap(), 870);
        assert_eq!(parse_wall_clock("2:30 PM").unwrap(), 870);
    }

    #[test]
    fn hour_labels_match_the_views() {
        assert_eq!(hour_slot_label(9), "09:00");
        assert_eq!(hour_label(0), "12 AM");
        assert_eq!(hour_label(9), "9 AM");
        assert_eq!(hour_label(12), "12 PM");
        assert_eq!(hour_label(20), "8 PM");
    }

    proptest! {
        #[test]
        fn round_trips_every_minute_of_the_day(minutes in 0u32..MINUTES_PER_DAY) {
            let formatted = to_time_string(minutes).unwrap();
            prop_assert_eq!(to_minutes(&formatted).unwrap(), minutes);
        }

        #[test]
        fn round_trips_every_valid_time_string(hours in 0u32..24, minutes in 0u32..60) {
            let time = format!("{hours:02}:{minutes:02}");
            let parsed = to_minutes(&time).unwrap();
            prop_assert_eq!(to_time_string(parsed).unwrap(), time);
        }
    }
}
