use chrono::{NaiveDateTime, NaiveTime};

use crate::aggregate::calendar::record_date;

fn parse_time(raw: &str) -> Option<NaiveTime> {
    ["%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw.trim(), fmt).ok())
}

/// `2025-01-30` → `January 30, 2025`. Unparsable input comes back unchanged.
pub fn long_date(raw: &str) -> String {
    match record_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// `13:05:00` → `01:05 PM`.
pub fn clock_time(raw: &str) -> Option<String> {
    parse_time(raw).map(|t| t.format("%I:%M %p").to_string())
}

/// `09:00 AM - 05:00 PM`, or `fallback` unless both ends are present and readable.
pub fn time_range(start: Option<&str>, end: Option<&str>, fallback: &str) -> String {
    match (start.and_then(clock_time), end.and_then(clock_time)) {
        (Some(start), Some(end)) => format!("{start} - {end}"),
        _ => fallback.to_string(),
    }
}

/// Joins a record's date and time-of-day into an ISO local date-time.
pub fn date_time(date: Option<&str>, time: Option<&str>) -> Option<String> {
    let date = record_date(date?)?;
    let time = parse_time(time?)?;
    Some(
        NaiveDateTime::new(date, time)
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string(),
    )
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
