//! X-axis label formatting.

use crate::config::{DailyLabelStyle, HourFormat};
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Applies the configured fixed hour offset and resolves the timestamp.
/// Out-of-range timestamps clamp to the epoch rather than failing a render.
pub fn local_time(timestamp_seconds: i64, offset_hours: i32) -> DateTime<Utc> {
    let shifted = timestamp_seconds.saturating_add(i64::from(offset_hours) * 3600);
    DateTime::<Utc>::from_timestamp(shifted, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

pub fn hour_label(time: &DateTime<Utc>, format: HourFormat) -> String {
    let hour = time.hour();
    match format {
        HourFormat::TwentyFourHour => hour.to_string(),
        HourFormat::TwelveHour => {
            let suffix = if hour < 12 { "am" } else { "pm" };
            let h = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{h}{suffix}")
        }
    }
}

pub fn daily_label(time: &DateTime<Utc>, style: DailyLabelStyle) -> String {
    match style {
        DailyLabelStyle::DayOfMonth => time.day().to_string(),
        DailyLabelStyle::Weekday => weekday_short(time),
        DailyLabelStyle::WeekdayAndDay => format!("{} {}", weekday_short(time), time.day()),
    }
}

/// First two letters of the weekday name, matching the original widget's
/// truncated locale string.
fn weekday_short(time: &DateTime<Utc>) -> String {
    let name = time.format("%a").to_string();
    name.chars().take(2).collect()
}
