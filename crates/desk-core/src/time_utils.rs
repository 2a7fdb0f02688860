use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// 12-hour time of day shown on session panels.
pub const TIME_OF_DAY_FORMAT: &str = "%I:%M %p";
const UNKNOWN_TIME_OF_DAY: &str = "--:--";

/// Returns the current Unix timestamp in milliseconds.
pub fn current_unix_timestamp_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .try_into()
        .unwrap_or(u64::MAX)
}

/// Formats `unix_ms` as local time of day, e.g. `02:05 PM`.
pub fn format_time_of_day(unix_ms: u64) -> String {
    format_time_of_day_in(unix_ms, &Local)
}

pub fn format_time_of_day_in<Tz>(unix_ms: u64, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Ok(millis) = i64::try_from(unix_ms) else {
        return UNKNOWN_TIME_OF_DAY.to_string();
    };
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(zone)
            .format(TIME_OF_DAY_FORMAT)
            .to_string(),
        None => UNKNOWN_TIME_OF_DAY.to_string(),
    }
}
